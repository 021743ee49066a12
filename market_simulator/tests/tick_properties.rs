//! Property tests for the price walk and the mood cursor.
//!
//! Uses proptest to verify:
//! 1. Shape: a tick never reorders, adds or drops quotes
//! 2. Change identity: change is the rounded difference of new and old price
//! 3. Bounded step: no price moves by more than the perturbation range
//! 4. Mood period: advancing `count` times returns to the start

use market_common::Quote;
use market_common::numeric::round_to;
use market_simulator::simulator::{advance_mood, tick_with};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_quote() -> impl Strategy<Value = Quote> {
    ("[A-Z]{1,9}", 0.0..5000.0_f64, -10.0..10.0_f64).prop_map(|(symbol, price, change)| {
        Quote::seed(symbol, (price * 100.0).round() / 100.0, (change * 10.0).round() / 10.0)
    })
}

fn arb_quotes() -> impl Strategy<Value = Vec<Quote>> {
    prop::collection::vec(arb_quote(), 0..12)
}

// ── 1-3. Tick ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn tick_preserves_length_and_order(quotes in arb_quotes(), seed in any::<u64>()) {
        let next = tick_with(&quotes, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(next.len(), quotes.len());
        for (before, after) in quotes.iter().zip(&next) {
            prop_assert_eq!(before.symbol(), after.symbol());
        }
    }

    #[test]
    fn change_is_rounded_price_difference(quotes in arb_quotes(), seed in any::<u64>()) {
        let next = tick_with(&quotes, &mut StdRng::seed_from_u64(seed));
        for (before, after) in quotes.iter().zip(&next) {
            prop_assert_eq!(after.change(), round_to(after.price() - before.price(), 1));
        }
    }

    #[test]
    fn price_moves_within_perturbation_range(quotes in arb_quotes(), seed in any::<u64>()) {
        let next = tick_with(&quotes, &mut StdRng::seed_from_u64(seed));
        for (before, after) in quotes.iter().zip(&next) {
            prop_assert!(after.price() >= 0.0);
            prop_assert!((after.price() - before.price()).abs() <= 3.005 + 1e-9);
        }
    }
}

// ── 4. Mood period ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn advancing_count_times_is_identity(count in 1..50usize, start in 0..50usize) {
        let start = start % count;
        let end = (0..count).fold(start, |index, _| advance_mood(index, count));
        prop_assert_eq!(end, start);
    }

    #[test]
    fn advanced_index_stays_in_range(count in 1..50usize, start in 0..50usize) {
        prop_assert!(advance_mood(start % count, count) < count);
    }
}
