//! Directional bar coloring.
//!
//! A bar is "up" when its close is at or above the prior close (equality
//! counts as up); the first bar defaults to up. Candle and volume rendering
//! both read this one classification.

use crate::domain::indicator::BarColor;

pub fn bar_colors(closes: &[f64]) -> Vec<BarColor> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            if i == 0 || close >= closes[i - 1] {
                BarColor::Up
            } else {
                BarColor::Down
            }
        })
        .collect()
}
