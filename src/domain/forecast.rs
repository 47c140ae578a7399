//! One-year price forecast reshaping.
//!
//! The AI collaborator supplies a low/mid/high band plus a confidence label
//! and a list of key drivers. The chart wants exactly two points: today at
//! the current price (degenerate range) and the forecast midpoint carrying
//! the low/high range. No payload means no series, never a zeroed one.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OneYearPrice {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    pub confidence: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastPayload {
    pub one_year_price: Option<OneYearPrice>,
    pub key_drivers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLabel {
    Current,
    Forecast,
}

impl PointLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointLabel::Current => "current",
            PointLabel::Forecast => "forecast",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub label: PointLabel,
    pub price: f64,
    pub range: (f64, f64),
}

/// Build the two-point forecast series, or `None` when the payload or its
/// price band is absent.
pub fn forecast_series(
    payload: Option<&ForecastPayload>,
    current_price: f64,
) -> Option<Vec<ForecastPoint>> {
    let band = payload?.one_year_price.as_ref()?;

    Some(vec![
        ForecastPoint {
            label: PointLabel::Current,
            price: current_price,
            range: (current_price, current_price),
        },
        ForecastPoint {
            label: PointLabel::Forecast,
            price: band.mid,
            range: (band.low, band.high),
        },
    ])
}
