//!
//! Common types and utilities shared by the market simulator and the dashboard.
//!
//! This crate aggregates:
//! - `error`: unified error type `DashboardError` used across the workspace.
//! - `result`: handy `Result<T, DashboardError>` alias.
//! - `tickers`: ticker symbols and the seed quote list.
//! - `quote`: the `Quote` value and its rounding rules.
//! - `mood`: the market mood sequence and its cyclic cursor.
//! - `currency`: rate table and the currency converter widget.
//! - `investment`: investment projection and the calculator widget.
//! - `schedule`: timer cadences and other compiled-in constants.
//! - `numeric`: strict number parsing and display rounding.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod tickers;
pub mod quote;
pub mod mood;
pub mod currency;
pub mod investment;
pub mod schedule;
pub mod numeric;

pub use error::DashboardError;
pub use result::Result;
pub use quote::{Direction, Quote};
pub use mood::{Mood, MoodIndex};
pub use currency::{Currency, CurrencyConverter, RateTable};
pub use investment::{InvestmentCalculator, Projection};
