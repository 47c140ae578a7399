//! Simple moving average over trailing closes.
//!
//! O(n) sliding-sum implementation.
//! SMA(n)[i] = (C[i-n+1] + ... + C[i]) / n
//! Warmup: the first (n-1) slots are `None`.

/// Rolling arithmetic mean of `values` over `window` elements.
///
/// The output is index-aligned with the input: slot `i` is `Some` iff
/// `i >= window - 1`. A window of 0 or a window longer than the input
/// yields an all-`None` column of the same length.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    let mut out = Vec::with_capacity(values.len());
    let mut window_sum = 0.0_f64;

    for (i, &v) in values.iter().enumerate() {
        window_sum += v;
        if i >= window {
            window_sum -= values[i - window];
        }

        if i >= window - 1 {
            out.push(Some(window_sum / window as f64));
        } else {
            out.push(None);
        }
    }

    out
}
