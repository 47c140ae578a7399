//! Technical indicator computation over a price-bar sequence.
//!
//! [`IndicatorSeries`] holds parallel columns aligned index-for-index with
//! the input bars: four moving averages, the volatility band, and the
//! per-bar directional color. Columns use `Option<f64>` so a slot inside an
//! indicator's warmup window is distinguishable from a computed value.

pub mod sma;
pub mod boll;
pub mod color;

use crate::domain::ohlcv::PriceBar;
use sma::rolling_mean;
use boll::bollinger_bands;
use color::bar_colors;

pub const MA_SHORT: usize = 5;
pub const MA_MEDIUM: usize = 20;
pub const MA_LONG: usize = 60;
pub const MA_EXTRA_LONG: usize = 120;

pub const BOLL_PERIOD: usize = 20;
pub const BOLL_MULT: f64 = 2.0;

/// Direction of one bar relative to the previous close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Up,
    Down,
}

impl BarColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarColor::Up => "up",
            BarColor::Down => "down",
        }
    }
}

/// Parallel indicator columns, all the same length as the input bars.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub ma5: Vec<Option<f64>>,
    pub ma20: Vec<Option<f64>>,
    pub ma60: Vec<Option<f64>>,
    pub ma120: Vec<Option<f64>>,
    pub boll_upper: Vec<Option<f64>>,
    pub boll_mid: Vec<Option<f64>>,
    pub boll_lower: Vec<Option<f64>>,
    pub bar_colors: Vec<BarColor>,
}

impl IndicatorSeries {
    /// Compute every column from an ordered bar sequence.
    ///
    /// Pure: the output depends only on the input and the input is never
    /// mutated. An empty sequence yields an empty series; a sequence shorter
    /// than some window yields all-`None` columns for that window. Neither
    /// is an error.
    pub fn compute(bars: &[PriceBar]) -> IndicatorSeries {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

        let bands = bollinger_bands(&closes, BOLL_PERIOD, BOLL_MULT);

        IndicatorSeries {
            ma5: rolling_mean(&closes, MA_SHORT),
            ma20: rolling_mean(&closes, MA_MEDIUM),
            ma60: rolling_mean(&closes, MA_LONG),
            ma120: rolling_mean(&closes, MA_EXTRA_LONG),
            boll_upper: bands.upper,
            boll_mid: bands.mid,
            boll_lower: bands.lower,
            bar_colors: bar_colors(&closes),
        }
    }

    pub fn len(&self) -> usize {
        self.bar_colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bar_colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn make_bars(closes: &[f64]) -> Vec<PriceBar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Days::new(i as u64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000,
            })
            .collect()
    }

    #[test]
    fn all_columns_match_input_length() {
        let bars = make_bars(&[10.0; 25]);
        let series = IndicatorSeries::compute(&bars);

        assert_eq!(series.len(), 25);
        assert_eq!(series.ma5.len(), 25);
        assert_eq!(series.ma20.len(), 25);
        assert_eq!(series.ma60.len(), 25);
        assert_eq!(series.ma120.len(), 25);
        assert_eq!(series.boll_upper.len(), 25);
        assert_eq!(series.boll_mid.len(), 25);
        assert_eq!(series.boll_lower.len(), 25);
        assert_eq!(series.bar_colors.len(), 25);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = IndicatorSeries::compute(&[]);
        assert!(series.is_empty());
        assert!(series.ma120.is_empty());
        assert!(series.boll_upper.is_empty());
    }

    #[test]
    fn warmup_boundaries_per_window() {
        let closes: Vec<f64> = (0..130).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let series = IndicatorSeries::compute(&bars);

        for (column, window) in [
            (&series.ma5, 5),
            (&series.ma20, 20),
            (&series.ma60, 60),
            (&series.ma120, 120),
        ] {
            for (i, slot) in column.iter().enumerate() {
                assert_eq!(slot.is_some(), i >= window - 1, "window {window} index {i}");
            }
        }
    }

    #[test]
    fn band_nullability_follows_ma20() {
        let bars = make_bars(&[10.0; 19]);
        let series = IndicatorSeries::compute(&bars);
        assert!(series.ma20.iter().all(Option::is_none));
        assert!(series.boll_upper.iter().all(Option::is_none));
        assert!(series.boll_lower.iter().all(Option::is_none));
    }

    #[test]
    fn boll_mid_equals_ma20() {
        let closes: Vec<f64> = (0..30).map(|i| 50.0 + (i % 7) as f64).collect();
        let bars = make_bars(&closes);
        let series = IndicatorSeries::compute(&bars);

        for (mid, ma) in series.boll_mid.iter().zip(series.ma20.iter()) {
            match (mid, ma) {
                (Some(m), Some(a)) => assert_relative_eq!(*m, *a),
                (None, None) => {}
                _ => panic!("boll_mid and ma20 disagree on nullability"),
            }
        }
    }

    #[test]
    fn recompute_is_identical() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i * i % 13) as f64).collect();
        let bars = make_bars(&closes);
        assert_eq!(
            IndicatorSeries::compute(&bars),
            IndicatorSeries::compute(&bars)
        );
    }

    #[test]
    fn input_is_not_mutated() {
        let bars = make_bars(&[10.0, 20.0, 30.0]);
        let snapshot = bars.clone();
        let _ = IndicatorSeries::compute(&bars);
        assert_eq!(bars, snapshot);
    }
}
