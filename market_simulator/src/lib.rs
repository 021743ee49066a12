//! Simulated market backend for the dashboard.
//!
//! Wires together three building blocks:
//!
//! - `simulator`: the per-tick price random walk and the mood cursor step.
//! - `task`: `PeriodicTask`, a cancellable repeating job on its own thread. Stopping or
//!   dropping the task always joins the thread, so a torn-down owner never leaves a timer
//!   behind.
//! - `session`: `MarketSession`, which owns one task for quotes and one for the mood and
//!   publishes immutable snapshots as `MarketEvent`s on a `crossbeam_channel`.
//!
//! Each task is the only writer of its own state; the two never share a lock or a stop
//! channel, and consumers only ever see `Arc<[Quote]>` snapshots and `Copy` moods.
#![warn(missing_docs)]
pub mod config;
pub mod session;
pub mod simulator;
pub mod task;

pub use config::SimulatorConfig;
pub use session::{MarketEvent, MarketSession, QuoteSnapshot};
pub use task::PeriodicTask;
