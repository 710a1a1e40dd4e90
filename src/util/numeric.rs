/// Rounds `value` up at the given number of decimal places.
///
/// `ceil_to_decimal_place(1.231, 2)` is `1.24`.
#[must_use]
pub fn ceil_to_decimal_place(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).ceil() / factor
}

/// Folds the `n`-th sample `val` into a running `mean` of the previous `n - 1`
/// samples, rounded half-to-even at `round_at` decimal places.
///
/// Returns `0.0` when `n` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cumulative_mean(mean: f64, val: f64, n: u64, round_at: i32) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    let mean = ((n - 1.0) * mean + val) / n;
    let factor = 10f64.powi(round_at);
    (mean * factor).round_ties_even() / factor
}
