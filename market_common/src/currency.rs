//! Static conversion rates and the currency converter widget.
//!
//! Rates are stored relative to a single reference currency (USD = 1), never as a
//! matrix of pairs. A conversion therefore normalises the amount into the reference
//! currency first and then scales it into the target.

use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::DashboardError;
use crate::numeric::parse_amount;
use crate::result::Result;

/// Currencies offered by the converter.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    USD,
    INR,
    EUR,
    BTC,
}

/// Demo rates against USD.
pub const DEMO_RATES: [(Currency, f64); 4] = [
    (Currency::USD, 1.0),
    (Currency::INR, 83.2),
    (Currency::EUR, 0.92),
    (Currency::BTC, 0.000017),
];

/// Decimal places for ordinary currencies.
pub const STANDARD_DECIMALS: usize = 2;
/// Decimal places for the table's sub-unit currency, which would otherwise show as `0.00`.
pub const FINE_DECIMALS: usize = 6;

/// Immutable mapping from currency to its factor against the reference currency.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<Currency, f64>,
}

impl RateTable {
    /// Build a table, checking that every selectable currency has a positive, finite rate.
    pub fn new(entries: impl IntoIterator<Item = (Currency, f64)>) -> Result<Self> {
        let rates: HashMap<Currency, f64> = entries.into_iter().collect();
        for currency in Currency::iter() {
            match rates.get(&currency) {
                None => return Err(DashboardError::MissingRate(currency)),
                Some(&rate) if !rate.is_finite() || rate <= 0.0 => {
                    return Err(DashboardError::InvalidRate { currency, rate });
                }
                Some(_) => {}
            }
        }
        Ok(RateTable { rates })
    }

    /// The compiled-in demo table, validated like any other.
    pub fn demo() -> Result<Self> {
        RateTable::new(DEMO_RATES)
    }

    /// Factor of `currency` against the reference currency.
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    /// Entries in selector order.
    pub fn entries(&self) -> Vec<(Currency, f64)> {
        Currency::iter()
            .filter_map(|currency| self.rate(currency).map(|rate| (currency, rate)))
            .collect()
    }

    /// Decimal places used when `target` is the output currency.
    ///
    /// The lowest-magnitude unit of the table (smallest factor, below 1) gets
    /// [`FINE_DECIMALS`]; everything else gets [`STANDARD_DECIMALS`].
    pub fn precision_for(&self, target: Currency) -> usize {
        let smallest = self.rates.values().copied().fold(f64::INFINITY, f64::min);
        match self.rate(target) {
            Some(rate) if rate == smallest && rate < 1.0 => FINE_DECIMALS,
            _ => STANDARD_DECIMALS,
        }
    }
}

/// Convert `amount_text` from `from` into `to`.
///
/// Returns an empty string when the amount is not (yet) a number.
pub fn convert(amount_text: &str, from: Currency, to: Currency, table: &RateTable) -> String {
    let (Some(amount), Some(from_rate), Some(to_rate)) =
        (parse_amount(amount_text), table.rate(from), table.rate(to))
    else {
        return String::new();
    };
    let reference_value = amount / from_rate;
    let result = reference_value * to_rate;
    format!("{:.*}", table.precision_for(to), result)
}

/// Converter widget state.
///
/// Every input setter recomputes the output immediately, so `output()` always reflects
/// the latest inputs. [`CurrencyConverter::convert`] exists for an explicit "Convert"
/// action but is never needed for correctness.
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    table: RateTable,
    amount: String,
    from: Currency,
    to: Currency,
    output: String,
}

impl CurrencyConverter {
    /// Create a converter with an empty amount, converting USD to INR.
    pub fn new(table: RateTable) -> Self {
        CurrencyConverter {
            table,
            amount: String::new(),
            from: Currency::USD,
            to: Currency::INR,
            output: String::new(),
        }
    }

    /// Replace the amount text.
    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
        self.recompute();
    }

    /// Select the source currency.
    pub fn set_from(&mut self, from: Currency) {
        self.from = from;
        self.recompute();
    }

    /// Select the target currency.
    pub fn set_to(&mut self, to: Currency) {
        self.to = to;
        self.recompute();
    }

    /// Explicit convert action; returns the current output.
    pub fn convert(&mut self) -> &str {
        self.recompute();
        &self.output
    }

    /// Converted amount, or an empty string if the amount is not a number.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Target currency.
    pub fn target(&self) -> Currency {
        self.to
    }

    /// Result line, e.g. `= 8320.00 INR`; empty while there is nothing to show.
    pub fn display(&self) -> String {
        if self.output.is_empty() {
            String::new()
        } else {
            format!("= {} {}", self.output, self.to)
        }
    }

    fn recompute(&mut self) {
        self.output = convert(&self.amount, self.from, self.to, &self.table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_usd_to_inr() {
        let table = RateTable::new([
            (Currency::USD, 1.0),
            (Currency::INR, 83.2),
            (Currency::EUR, 0.92),
            (Currency::BTC, 0.000017),
        ])
        .unwrap();
        assert_eq!(convert("100", Currency::USD, Currency::INR, &table), "8320.00");
    }

    #[test]
    fn normalises_through_reference_currency() {
        let table = RateTable::demo().unwrap();
        // 83.2 INR -> 1 USD -> 0.92 EUR
        assert_eq!(convert("83.2", Currency::INR, Currency::EUR, &table), "0.92");
    }

    #[test]
    fn fine_precision_for_sub_unit_target() {
        let table = RateTable::demo().unwrap();
        assert_eq!(convert("100", Currency::USD, Currency::BTC, &table), "0.001700");
        assert_eq!(table.precision_for(Currency::BTC), FINE_DECIMALS);
        assert_eq!(table.precision_for(Currency::EUR), STANDARD_DECIMALS);
    }

    #[test]
    fn unparseable_amount_gives_empty_output() {
        let table = RateTable::demo().unwrap();
        for from in Currency::iter() {
            for to in Currency::iter() {
                assert_eq!(convert("", from, to, &table), "");
                assert_eq!(convert("abc", from, to, &table), "");
            }
        }
    }

    #[test]
    fn rejects_incomplete_or_non_positive_tables() {
        let missing =
            RateTable::new([(Currency::USD, 1.0), (Currency::INR, 83.2), (Currency::EUR, 0.92)]);
        assert!(matches!(missing, Err(DashboardError::MissingRate(Currency::BTC))));

        let zero = RateTable::new([
            (Currency::USD, 1.0),
            (Currency::INR, 0.0),
            (Currency::EUR, 0.92),
            (Currency::BTC, 0.000017),
        ]);
        assert!(matches!(zero, Err(DashboardError::InvalidRate { currency: Currency::INR, .. })));
    }

    #[test]
    fn widget_recomputes_on_every_input_change() {
        let mut converter = CurrencyConverter::new(RateTable::demo().unwrap());
        assert_eq!(converter.output(), "");
        assert_eq!(converter.display(), "");

        converter.set_amount("100");
        assert_eq!(converter.output(), "8320.00");
        assert_eq!(converter.display(), "= 8320.00 INR");

        converter.set_to(Currency::EUR);
        assert_eq!(converter.output(), "92.00");

        converter.set_from(Currency::EUR);
        assert_eq!(converter.output(), "100.00");

        converter.set_amount("1x");
        assert_eq!(converter.output(), "");
        assert_eq!(converter.convert(), "");
    }

    #[test]
    fn demo_table_passes_validation() {
        let table = RateTable::demo().unwrap();
        let codes: Vec<Currency> = table.entries().into_iter().map(|(code, _)| code).collect();
        assert_eq!(codes, Currency::iter().collect::<Vec<_>>());
        assert_eq!(table.rate(Currency::INR), Some(83.2));
    }

    #[test]
    fn parses_codes_from_selector_text() {
        assert_eq!("btc".parse::<Currency>().ok(), Some(Currency::BTC));
        assert_eq!(Currency::INR.to_string(), "INR");
    }
}
