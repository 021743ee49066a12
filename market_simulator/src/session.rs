//! Market session: the two timers behind a running dashboard.
//!
//! A `MarketSession` owns exactly two `PeriodicTask`s:
//!
//! - the quote task owns the quote collection and its RNG; on every tick it replaces the
//!   whole collection and publishes `MarketEvent::Quotes` with the new snapshot;
//! - the mood task owns the `MoodIndex` and publishes `MarketEvent::Mood` after each step.
//!
//! The tasks share nothing but clones of the event `Sender`. If every receiver is gone,
//! a publish fails, is logged at debug level and the task carries on until stopped.
//! A publish into a full bounded channel waits for room or for the stop signal, whichever
//! comes first, so dropping the session stops both tasks even with a stalled consumer.

use std::ops::ControlFlow;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use crossbeam_channel::{Receiver, Sender, select};
use log::{debug, info};
use market_common::tickers::seed_quotes;
use market_common::{Mood, MoodIndex, Quote, Result};

use crate::config::SimulatorConfig;
use crate::simulator::tick_with;
use crate::task::PeriodicTask;

/// Immutable view of the quote collection at one point in time.
#[derive(Debug, Clone)]
pub struct QuoteSnapshot {
    quotes: Arc<[Quote]>,
    sequence: u64,
    taken_at: DateTime<Utc>,
}

impl QuoteSnapshot {
    /// Snapshot of the seed collection, before any tick.
    pub fn seed() -> Self {
        Self::new(seed_quotes(), 0)
    }

    /// Wrap `quotes` as the snapshot after `sequence` ticks, stamped with the current time.
    pub fn new(quotes: impl Into<Arc<[Quote]>>, sequence: u64) -> Self {
        QuoteSnapshot {
            quotes: quotes.into(),
            sequence,
            taken_at: Utc::now(),
        }
    }

    /// Quotes in seed order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of ticks applied since the seed; 0 for the seed itself.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// When the snapshot was produced.
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }
}

/// Message published by a session to its consumer.
#[derive(Debug, Clone)]
pub enum MarketEvent {
    /// The quote collection was replaced.
    Quotes(QuoteSnapshot),
    /// The mood cursor advanced.
    Mood(Mood),
}

/// Running simulation. Stops both of its timers when stopped or dropped.
pub struct MarketSession {
    quote_task: PeriodicTask,
    mood_task: PeriodicTask,
}

impl MarketSession {
    /// Start both timers, publishing every update to `sink`.
    pub fn start(config: SimulatorConfig, sink: Sender<MarketEvent>) -> Result<Self> {
        let quote_task = Self::spawn_quote_task(&config, sink.clone())?;
        let mood_task = Self::spawn_mood_task(&config, sink)?;
        info!(
            "Market session started (quotes every {:?}, mood every {:?})",
            config.quote_interval, config.mood_interval
        );
        Ok(MarketSession {
            quote_task,
            mood_task,
        })
    }

    fn spawn_quote_task(
        config: &SimulatorConfig,
        sink: Sender<MarketEvent>,
    ) -> Result<PeriodicTask> {
        let mut rng = config.rng();
        let mut current = QuoteSnapshot::seed();

        PeriodicTask::spawn("quote-tick", config.quote_interval, move |stop| {
            let next: Arc<[Quote]> = tick_with(current.quotes(), &mut rng).into();
            current = QuoteSnapshot::new(next, current.sequence() + 1);
            publish(&sink, MarketEvent::Quotes(current.clone()), stop)
        })
    }

    fn spawn_mood_task(
        config: &SimulatorConfig,
        sink: Sender<MarketEvent>,
    ) -> Result<PeriodicTask> {
        let mut index = MoodIndex::default();

        PeriodicTask::spawn("mood-tick", config.mood_interval, move |stop| {
            index = index.next();
            publish(&sink, MarketEvent::Mood(index.mood()), stop)
        })
    }

    /// True while both timers are alive.
    pub fn is_running(&self) -> bool {
        self.quote_task.is_running() && self.mood_task.is_running()
    }

    /// Stop both timers. Each is stopped even if the other fails to join.
    pub fn stop(mut self) -> Result<()> {
        let quotes = self.quote_task.stop();
        let mood = self.mood_task.stop();
        info!("Market session stopped");
        quotes.and(mood)
    }
}

/// Send `event`, giving up as soon as the owning task is told to stop.
///
/// A disconnected sink only drops this event; the task keeps ticking.
fn publish(
    sink: &Sender<MarketEvent>,
    event: MarketEvent,
    stop: &Receiver<()>,
) -> ControlFlow<()> {
    select! {
        send(sink, event) -> sent => {
            if let Err(e) = sent {
                debug!("Market event dropped: {}", e);
            }
            ControlFlow::Continue(())
        },
        recv(stop) -> _ => ControlFlow::Break(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_snapshot_starts_at_zero() {
        let snapshot = QuoteSnapshot::seed();
        assert_eq!(snapshot.sequence(), 0);
        assert_eq!(snapshot.quotes().len(), 6);
        assert_eq!(snapshot.quotes()[2].symbol(), "TATASTEEL");
    }

    #[test]
    fn snapshots_share_quotes_without_copying() {
        let snapshot = QuoteSnapshot::seed();
        let copy = snapshot.clone();
        assert!(std::ptr::eq(snapshot.quotes(), copy.quotes()));
    }
}
