use super::PRECISION_DECIMALS;

/// Rounds `value` to [`PRECISION_DECIMALS`] decimal places.
///
/// Negative zero is normalised to positive zero so that rounded values
/// compare equal bitwise.
#[must_use]
pub fn round_coord(value: f64) -> f64 {
    let scale = 10f64.powi(PRECISION_DECIMALS);
    (value * scale).round() / scale + 0.0
}

/// Returns a hashable key for `value` after rounding.
#[must_use]
pub fn coord_key(value: f64) -> u64 {
    round_coord(value).to_bits()
}

/// Returns `true` if `a` and `b` are equal once rounded.
#[must_use]
pub fn coords_equal(a: f64, b: f64) -> bool {
    coord_key(a) == coord_key(b)
}
