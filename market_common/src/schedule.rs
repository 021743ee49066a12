//! Compiled-in cadences and display constants shared by simulator and dashboard.

/// Interval between two quote ticks, in milliseconds.
pub const QUOTE_TICK_MS: u64 = 2200;
/// Interval between two mood ticks, in milliseconds.
pub const MOOD_TICK_MS: u64 = 3500;
/// Half-width of the uniform price perturbation applied on every tick.
pub const MAX_PRICE_DELTA: f64 = 3.0;
/// Position of the quote shown on the featured card.
pub const FEATURED_INDEX: usize = 2;
