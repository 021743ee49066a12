//! Error types shared by the simulator and the dashboard.
//!
//! Malformed numeric input is not an error anywhere in the workspace; the calculators
//! report it as an empty output. `DashboardError` covers the remaining setup and plumbing
//! failures: table validation, channels, task threads, signals and I/O.
use std::io;

use thiserror::Error;

use crate::currency::Currency;

/// Unified error type shared by every crate in the workspace.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// I/O error originating from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Channel receive failed (all senders closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),

    /// A selectable currency has no entry in the rate table.
    #[error("Rate table has no entry for {0}")]
    MissingRate(Currency),

    /// A rate table entry is zero, negative or not finite.
    #[error("Invalid rate {rate} for {currency}")]
    InvalidRate {
        /// Currency the rate belongs to.
        currency: Currency,
        /// Offending factor.
        rate: f64,
    },

    /// A periodic task thread panicked before it could be joined.
    #[error("Periodic task '{0}' panicked")]
    TaskPanicked(String),

    /// Installing the shutdown signal handler failed.
    #[error("Signal handler error: {0}")]
    Signal(String),
}
