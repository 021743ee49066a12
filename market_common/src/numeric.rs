//! Number parsing and rounding helpers used by the quote model and the calculators.

/// Parse user-entered text as a finite number.
///
/// Surrounding whitespace is ignored. Empty, malformed, `NaN` and infinite inputs all
/// yield `None`, which the widgets render as an empty output.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Round `value` to `decimals` places, with halves rounded towards positive infinity.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale + 0.5).floor() / scale;
    // normalise -0.0 so it never renders as "-0.0"
    if rounded == 0.0 { 0.0 } else { rounded }
}
