//! Price random walk and mood stepping.
//!
//! `tick` replaces every quote in a collection with a repriced copy; nothing is mutated in
//! place, so any consumer still holding the previous collection keeps a consistent view.

use market_common::Quote;
use market_common::schedule::MAX_PRICE_DELTA;
use rand::Rng;

pub use market_common::mood::advance_mood;

/// Uniform draw in `[-MAX_PRICE_DELTA, +MAX_PRICE_DELTA)`.
pub fn perturbation<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.random::<f64>() - 0.5) * 2.0 * MAX_PRICE_DELTA
}

/// Advance every quote by an independent perturbation drawn from `rng`.
///
/// Output order and length always match the input.
pub fn tick_with<R: Rng + ?Sized>(quotes: &[Quote], rng: &mut R) -> Vec<Quote> {
    quotes
        .iter()
        .map(|quote| quote.repriced(quote.price() + perturbation(rng)))
        .collect()
}

/// [`tick_with`] using the thread-local generator.
pub fn tick(quotes: &[Quote]) -> Vec<Quote> {
    tick_with(quotes, &mut rand::rng())
}
