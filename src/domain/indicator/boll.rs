//! Volatility band (BOLL) around the 20-period moving average.
//!
//! Middle: SMA over `period` closes.
//! Upper/Lower: middle ± multiplier × population standard deviation of the
//! same window (divides by N, not N-1).
//! Warmup: the first (period-1) slots are `None` in all three columns.

use crate::domain::indicator::sma::rolling_mean;

#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<Option<f64>>,
    pub mid: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

pub fn bollinger_bands(closes: &[f64], period: usize, mult: f64) -> BollingerBands {
    let mid = rolling_mean(closes, period);
    let mut upper = Vec::with_capacity(closes.len());
    let mut lower = Vec::with_capacity(closes.len());

    for (i, mean) in mid.iter().enumerate() {
        match mean {
            Some(m) => {
                let window = &closes[i + 1 - period..=i];
                let variance = window
                    .iter()
                    .map(|c| {
                        let diff = c - m;
                        diff * diff
                    })
                    .sum::<f64>()
                    / period as f64;
                let stddev = variance.sqrt();
                upper.push(Some(m + mult * stddev));
                lower.push(Some(m - mult * stddev));
            }
            None => {
                upper.push(None);
                lower.push(None);
            }
        }
    }

    BollingerBands { upper, mid, lower }
}
