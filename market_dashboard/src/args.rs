//! Command-line arguments for the market dashboard.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use market_common::Currency;
use market_common::schedule::{MOOD_TICK_MS, QUOTE_TICK_MS};
use market_simulator::SimulatorConfig;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What to run.
    #[command(subcommand)]
    pub command: DashboardCommand,
}

/// Dashboard subcommands.
#[derive(Debug, Subcommand)]
pub enum DashboardCommand {
    /// Run the live ticker and mood indicator until Ctrl+C.
    Watch(WatchArgs),

    /// Convert an amount between two currencies of the demo rate table.
    Convert {
        /// Amount to convert. Non-numeric text yields no result.
        #[clap(long, allow_hyphen_values = true)]
        amount: String,

        /// Source currency.
        #[clap(long, value_enum, default_value_t = Currency::USD)]
        from: Currency,

        /// Target currency.
        #[clap(long, value_enum, default_value_t = Currency::INR)]
        to: Currency,
    },

    /// Project an investment grown by an expected percentage.
    Invest {
        /// Amount invested.
        #[clap(long, allow_hyphen_values = true)]
        principal: String,

        /// Expected growth in percent.
        #[clap(long, allow_hyphen_values = true)]
        growth: String,

        /// Free-text stock name echoed with the result.
        #[clap(long, default_value = "")]
        label: String,
    },

    /// Print the demo rate table.
    Rates,

    /// Print the seed quotes as JSON.
    Quotes,
}

/// Options for `watch`.
#[derive(Debug, ClapArgs)]
pub struct WatchArgs {
    /// Milliseconds between quote ticks.
    #[clap(long, default_value_t = QUOTE_TICK_MS)]
    pub quote_interval_ms: u64,

    /// Milliseconds between mood ticks.
    #[clap(long, default_value_t = MOOD_TICK_MS)]
    pub mood_interval_ms: u64,

    /// Seed for a reproducible price walk.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Stop on its own after this many seconds.
    #[clap(long)]
    pub duration_secs: Option<u64>,

    /// Frame format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How `watch` prints frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Multi-line text frame.
    Text,
    /// One JSON object per line.
    Json,
}

impl WatchArgs {
    /// Simulator settings; zero intervals are raised to one millisecond.
    pub fn simulator_config(&self) -> SimulatorConfig {
        SimulatorConfig {
            quote_interval: Duration::from_millis(self.quote_interval_ms.max(1)),
            mood_interval: Duration::from_millis(self.mood_interval_ms.max(1)),
            seed: self.seed,
        }
    }
}
