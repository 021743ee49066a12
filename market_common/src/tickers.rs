//! Ticker symbols and the seed quote list the simulator starts from.

use strum_macros::{Display, EnumIter, EnumString};

use crate::quote::Quote;

/// Set of simulated instruments.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Display, EnumString, EnumIter, Hash, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum Ticker {
    TSLA,
    INFY,
    TATASTEEL,
    RELIANCE,
    GOOGL,
    SBI,
}

/// Initial `(ticker, price, change)` triples, in display order.
pub const SEED_QUOTES: [(Ticker, f64, f64); 6] = [
    (Ticker::TSLA, 843.5, 4.3),
    (Ticker::INFY, 1844.1, -1.6),
    (Ticker::TATASTEEL, 715.1, 0.7),
    (Ticker::RELIANCE, 3021.9, -2.1),
    (Ticker::GOOGL, 3281.9, 6.0),
    (Ticker::SBI, 677.4, -0.5),
];

/// Build the quote collection a dashboard session starts with.
pub fn seed_quotes() -> Vec<Quote> {
    SEED_QUOTES
        .iter()
        .map(|(ticker, price, change)| Quote::seed(ticker.to_string(), *price, *change))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn seed_covers_every_ticker_once() {
        let quotes = seed_quotes();
        let symbols: HashSet<&str> = quotes.iter().map(|q| q.symbol()).collect();
        assert_eq!(symbols.len(), quotes.len());
        for ticker in Ticker::iter() {
            assert!(symbols.contains(ticker.to_string().as_str()), "{ticker} missing");
        }
    }

    #[test]
    fn seed_keeps_declared_order() {
        let symbols: Vec<String> = seed_quotes().iter().map(|q| q.symbol().to_string()).collect();
        assert_eq!(symbols, ["TSLA", "INFY", "TATASTEEL", "RELIANCE", "GOOGL", "SBI"]);
    }

    #[test]
    fn parses_symbols_case_insensitively() {
        assert_eq!("tatasteel".parse::<Ticker>().ok(), Some(Ticker::TATASTEEL));
        assert!("ITC".parse::<Ticker>().is_err());
    }
}
