//! OHLCV price bar representation.

use chrono::NaiveDate;
use serde::Deserialize;

/// One daily price bar. Sequences are chronological with no duplicate dates;
/// the data feed guarantees both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl PriceBar {
    /// Percentage change of `close` against a reference close.
    pub fn change_pct(&self, prev_close: f64) -> f64 {
        if prev_close == 0.0 {
            0.0
        } else {
            (self.close - prev_close) / prev_close * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bar() -> PriceBar {
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            open: 100.0,
            high: 110.0,
            low: 90.0,
            close: 105.0,
            volume: 50_000,
        }
    }

    #[test]
    fn change_pct_against_prior_close() {
        let bar = sample_bar();
        // (105 - 100) / 100 * 100 = 5%
        assert!((bar.change_pct(100.0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn change_pct_zero_reference_is_zero() {
        let bar = sample_bar();
        assert_eq!(bar.change_pct(0.0), 0.0);
    }
}
