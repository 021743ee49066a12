//! Quote data model.
//!
//! A `Quote` is one instrument's last simulated state: its symbol, the last price and the
//! delta from the price before it. The price and the change are coupled: the only way to
//! move a price is [`Quote::repriced`], which derives the change from the old and new
//! price, so the two can never drift apart.

use serde::Serialize;
use strum_macros::Display;

use crate::numeric::round_to;

/// Decimal places kept on a price.
pub const PRICE_DECIMALS: i32 = 2;
/// Decimal places kept on a change.
pub const CHANGE_DECIMALS: i32 = 1;

/// Market quote for a single ticker symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    symbol: String,
    price: f64,
    change: f64,
}

/// Whether a quote moved up (or stayed flat) or down on its last tick.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Arrow used by the ticker strip and the featured card.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }
}

impl Quote {
    /// Create a quote from seed values. Used once per symbol when a session starts.
    pub fn seed(symbol: impl Into<String>, price: f64, change: f64) -> Self {
        Quote {
            symbol: symbol.into(),
            price,
            change,
        }
    }

    /// Produce the next version of this quote at `new_price`.
    ///
    /// The price is clamped at zero and rounded to 2 decimals; the change is the
    /// difference from the current price rounded to 1 decimal. `self` is left untouched.
    pub fn repriced(&self, new_price: f64) -> Quote {
        let price = round_to(new_price.max(0.0), PRICE_DECIMALS);
        Quote {
            symbol: self.symbol.clone(),
            price,
            change: round_to(price - self.price, CHANGE_DECIMALS),
        }
    }

    /// Symbol identifier, unique within a session.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Last simulated price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Delta from the previous price.
    pub fn change(&self) -> f64 {
        self.change
    }

    /// Flat quotes count as up.
    pub fn direction(&self) -> Direction {
        if self.change >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repriced_derives_change_from_old_price() {
        let quote = Quote::seed("TSLA", 843.5, 4.3);
        let next = quote.repriced(845.678);
        assert_eq!(next.symbol(), "TSLA");
        assert_eq!(next.price(), 845.68);
        assert_eq!(next.change(), 2.2);
        assert_eq!(quote.price(), 843.5);
        assert_eq!(quote.change(), 4.3);
    }

    #[test]
    fn repriced_never_goes_negative() {
        let quote = Quote::seed("SBI", 1.2, 0.0);
        let next = quote.repriced(-1.8);
        assert_eq!(next.price(), 0.0);
        assert_eq!(next.change(), -1.2);
        assert_eq!(next.direction(), Direction::Down);
    }

    #[test]
    fn flat_quote_points_up() {
        let quote = Quote::seed("INFY", 100.0, 0.0);
        assert_eq!(quote.direction(), Direction::Up);
        assert_eq!(quote.direction().arrow(), "▲");
    }

    #[test]
    fn json_carries_all_three_fields() {
        let value = serde_json::to_value(Quote::seed("GOOGL", 3281.9, 6.0)).unwrap();
        assert_eq!(value["symbol"], "GOOGL");
        assert_eq!(value["price"], 3281.9);
        assert_eq!(value["change"], 6.0);
    }
}
