//! Array manipulation helpers

use tracing::debug;

/// Produce the first `count` multiples of `number`, starting at the number
/// itself
///
/// `multiples_of(7.0, 5)` yields `[7.0, 14.0, 21.0, 28.0, 35.0]`.
pub fn multiples_of(number: f64, count: usize) -> Vec<f64> {
    debug!(number, count, "multiples_of: called");
    (1..=count).map(|i| number * i as f64).collect()
}

/// Rotate `data` to the right by `amount`, in place
///
/// Rotating `[1, 2, 3, 4, 5, 6, 7, 8, 9]` by 3 gives
/// `[7, 8, 9, 1, 2, 3, 4, 5, 6]`. Amounts larger than the slice length wrap
/// around; an empty slice is left untouched.
pub fn rotate_right<T>(data: &mut [T], amount: usize) {
    debug!(len = data.len(), amount, "rotate_right: called");
    if data.is_empty() {
        return;
    }
    data.rotate_right(amount % data.len());
}
