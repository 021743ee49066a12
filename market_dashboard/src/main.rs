//! Market Dashboard: a terminal rendition of the demo stock dashboard.
//!
//! `watch` starts a `MarketSession` (simulated quote ticks plus the cycling market mood)
//! and prints a frame every time either timer publishes. The calculator subcommands run
//! the converter and investment widgets once against the compiled-in demo data.
//!
//! Usage example (CLI):
//! ```bash
//! market_dashboard watch --duration-secs 30 --format json
//! market_dashboard convert --amount 100 --from usd --to inr
//! market_dashboard invest --principal 1000 --growth 10 --label TATASTEEL
//! ```
//!
//! Shutdown: Ctrl+C (or `--duration-secs`) ends the watch loop; the session is then
//! stopped, which joins both timer threads. An early return through `?` drops the session
//! and stops the timers the same way.
#![warn(missing_docs)]
mod args;
mod view;

use crate::args::{Args, DashboardCommand, OutputFormat, WatchArgs};
use crate::view::DashboardState;
use clap::Parser;
use crossbeam_channel::{Receiver, after, bounded, never, select, unbounded};
use log::{debug, info, warn};
use market_common::tickers::seed_quotes;
use market_common::{
    Currency, CurrencyConverter, DashboardError, InvestmentCalculator, RateTable, Result,
};
use market_simulator::MarketSession;
use std::time::Duration;

fn main() -> Result<(), DashboardError> {
    init_logger();
    let args = Args::parse();

    match args.command {
        DashboardCommand::Watch(watch_args) => watch(watch_args),
        DashboardCommand::Convert { amount, from, to } => convert(&amount, from, to),
        DashboardCommand::Invest { principal, growth, label } => {
            invest(&principal, &growth, &label);
            Ok(())
        }
        DashboardCommand::Rates => {
            for (currency, rate) in RateTable::demo()?.entries() {
                println!("{:<4} {}", currency, rate);
            }
            Ok(())
        }
        DashboardCommand::Quotes => {
            println!("{}", serde_json::to_string_pretty(&seed_quotes())?);
            Ok(())
        }
    }
}

/// Runs the live dashboard until Ctrl+C or until the optional duration elapses.
fn watch(watch_args: WatchArgs) -> Result<()> {
    let shutdown_rx = shutdown_channel()?;
    let deadline: Receiver<_> = match watch_args.duration_secs {
        Some(secs) => after(Duration::from_secs(secs)),
        None => never(),
    };

    let (event_tx, event_rx) = unbounded();
    let session = MarketSession::start(watch_args.simulator_config(), event_tx)?;
    let mut state = DashboardState::new();
    print_frame(&state, watch_args.format)?;
    info!("Dashboard is running. Press Ctrl+C to exit.");

    loop {
        select! {
            recv(shutdown_rx) -> _ => break,
            recv(deadline) -> _ => {
                info!("Watch duration elapsed");
                break;
            },
            recv(event_rx) -> msg => match msg {
                Ok(event) => {
                    debug!("Market event: {:?}", event);
                    state.apply(event);
                    print_frame(&state, watch_args.format)?;
                }
                Err(e) => return Err(DashboardError::ChannelRecv(e.to_string())),
            }
        }
    }

    session.stop()
}

fn shutdown_channel() -> Result<Receiver<()>> {
    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down dashboard...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| DashboardError::Signal(e.to_string()))?;
    Ok(shutdown_rx)
}

fn print_frame(state: &DashboardState, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in state.render() {
                println!("{line}");
            }
            println!();
        }
        OutputFormat::Json => println!("{}", state.to_json()?),
    }
    Ok(())
}

fn convert(amount: &str, from: Currency, to: Currency) -> Result<()> {
    let mut converter = CurrencyConverter::new(RateTable::demo()?);
    converter.set_amount(amount);
    converter.set_from(from);
    converter.set_to(to);

    let line = converter.display();
    if line.is_empty() {
        warn!("Amount {:?} is not a number, nothing to convert", amount);
    } else {
        println!("{line}");
    }
    Ok(())
}

fn invest(principal: &str, growth: &str, label: &str) {
    let mut calculator = InvestmentCalculator::new();
    calculator.set_label(label);
    calculator.set_principal(principal);
    calculator.set_growth(growth);

    let projection = calculator.projection();
    if projection.is_empty() {
        warn!("Principal {:?} or growth {:?} is not a number", principal, growth);
    } else {
        println!("Total after growth: ₹{}", projection.total);
        println!("Profit: ₹{}", projection.profit);
    }
    if let Some(label) = calculator.label() {
        println!("Stock: {label}");
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
