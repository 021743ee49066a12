//! Session configuration: tick cadences and the optional RNG seed.

use std::time::Duration;

use market_common::schedule::{MOOD_TICK_MS, QUOTE_TICK_MS};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings for a [`crate::MarketSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Interval between quote ticks.
    pub quote_interval: Duration,
    /// Interval between mood ticks.
    pub mood_interval: Duration,
    /// Fixed seed for a reproducible price walk; OS entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            quote_interval: Duration::from_millis(QUOTE_TICK_MS),
            mood_interval: Duration::from_millis(MOOD_TICK_MS),
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Random source for the quote task.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
