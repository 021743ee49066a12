//! Dashboard composition: display aggregates over the latest market state.
//!
//! Nothing here mutates a quote. `DashboardState` swaps in whole snapshots as they arrive
//! and everything else is a pure function of the current snapshot and mood.

use chrono::{DateTime, Utc};
use market_common::schedule::FEATURED_INDEX;
use market_common::{Direction, Mood, MoodIndex, Quote, Result};
use market_simulator::{MarketEvent, QuoteSnapshot};
use serde::Serialize;

/// Largest change in the collection, never below zero.
pub fn best_performer(quotes: &[Quote]) -> f64 {
    quotes.iter().map(Quote::change).fold(0.0, f64::max)
}

/// Smallest change in the collection, never above zero.
pub fn worst_performer(quotes: &[Quote]) -> f64 {
    quotes.iter().map(Quote::change).fold(0.0, f64::min)
}

/// Quote shown on the featured card, if the collection is long enough.
pub fn featured(quotes: &[Quote]) -> Option<&Quote> {
    quotes.get(FEATURED_INDEX)
}

/// Static figures on the back of the featured card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Analytics {
    /// 52-week high.
    pub high_52w: f64,
    /// 52-week low.
    pub low_52w: f64,
    /// Traded volume, as displayed.
    pub volume: &'static str,
}

/// Demo analytics; the simulator does not track history, so these never change.
pub const FEATURED_ANALYTICS: Analytics = Analytics {
    high_52w: 810.0,
    low_52w: 680.0,
    volume: "1.1M",
};

impl Analytics {
    /// `Analytics 52W H ₹810.00  52W L ₹680.00  Volume 1.1M`
    pub fn line(&self) -> String {
        format!(
            "Analytics 52W H ₹{}  52W L ₹{}  Volume {}",
            format_price(self.high_52w),
            format_price(self.low_52w),
            self.volume
        )
    }
}

/// One heatmap tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatCell {
    /// Instrument symbol.
    pub symbol: String,
    /// Direction of the last move.
    pub direction: Direction,
}

/// Symbols with their last direction, in collection order.
pub fn heatmap(quotes: &[Quote]) -> Vec<HeatCell> {
    quotes
        .iter()
        .map(|quote| HeatCell {
            symbol: quote.symbol().to_string(),
            direction: quote.direction(),
        })
        .collect()
}

/// `SYMBOL ▲ 4.3` per quote, separated by two spaces.
pub fn ticker_strip(quotes: &[Quote]) -> String {
    quotes
        .iter()
        .map(|quote| format!("{} {}", quote.symbol(), signed_move(quote)))
        .collect::<Vec<_>>()
        .join("  ")
}

fn signed_move(quote: &Quote) -> String {
    format!("{} {:.1}", quote.direction().arrow(), quote.change().abs())
}

/// Price with two decimals and comma thousands separators, e.g. `3,021.90`.
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Latest snapshot and mood, as seen by the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    snapshot: QuoteSnapshot,
    mood: Mood,
}

#[derive(Serialize)]
struct Frame<'a> {
    sequence: u64,
    taken_at: DateTime<Utc>,
    mood: Mood,
    mood_symbol: &'static str,
    quotes: &'a [Quote],
    best: f64,
    worst: f64,
    featured: Option<&'a Quote>,
    analytics: Option<Analytics>,
    heatmap: Vec<HeatCell>,
}

impl DashboardState {
    /// State before the first tick: seed quotes and the first mood.
    pub fn new() -> Self {
        DashboardState {
            snapshot: QuoteSnapshot::seed(),
            mood: MoodIndex::default().mood(),
        }
    }

    /// Replace the snapshot or the mood with the one carried by `event`.
    pub fn apply(&mut self, event: MarketEvent) {
        match event {
            MarketEvent::Quotes(snapshot) => self.snapshot = snapshot,
            MarketEvent::Mood(mood) => self.mood = mood,
        }
    }

    /// Current quotes.
    pub fn quotes(&self) -> &[Quote] {
        self.snapshot.quotes()
    }

    /// Current mood.
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Text frame, one line per dashboard section.
    pub fn render(&self) -> Vec<String> {
        let quotes = self.quotes();
        let mut lines = vec![
            format!(
                "[{}] tick #{}  Market Mood: {}",
                self.snapshot.taken_at().format("%H:%M:%S"),
                self.snapshot.sequence(),
                self.mood().symbol()
            ),
            ticker_strip(quotes),
            format!(
                "Best +{:.1}  Worst {:.1}",
                best_performer(quotes),
                worst_performer(quotes)
            ),
        ];
        if let Some(quote) = featured(quotes) {
            lines.push(format!(
                "Featured {} ₹{} {}",
                quote.symbol(),
                format_price(quote.price()),
                signed_move(quote)
            ));
            lines.push(FEATURED_ANALYTICS.line());
        }
        let cells: Vec<String> = heatmap(quotes)
            .iter()
            .map(|cell| format!("{}:{}", cell.symbol, cell.direction))
            .collect();
        lines.push(format!("Heatmap {}", cells.join(" ")));
        lines
    }

    /// The same frame as a single JSON line.
    pub fn to_json(&self) -> Result<String> {
        let quotes = self.quotes();
        let frame = Frame {
            sequence: self.snapshot.sequence(),
            taken_at: self.snapshot.taken_at(),
            mood: self.mood,
            mood_symbol: self.mood.symbol(),
            quotes,
            best: best_performer(quotes),
            worst: worst_performer(quotes),
            featured: featured(quotes),
            analytics: featured(quotes).map(|_| FEATURED_ANALYTICS),
            heatmap: heatmap(quotes),
        };
        Ok(serde_json::to_string(&frame)?)
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
