#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::HashMap;

use stocklens::domain::error::StocklensError;
use stocklens::domain::forecast::ForecastPayload;
pub use stocklens::domain::ohlcv::PriceBar;
use stocklens::domain::snapshot::{AnnualPoint, FinancialSnapshot};
use stocklens::ports::data_port::MarketDataPort;
use stocklens::ports::report_port::ReportPort;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(date_str: &str, close: f64) -> PriceBar {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap();
    PriceBar {
        date,
        open: close,
        high: close * 1.02,
        low: close * 0.98,
        close,
        volume: 10_000,
    }
}

pub fn generate_bars(start: &str, count: usize, base_close: f64) -> Vec<PriceBar> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    (0..count)
        .map(|i| {
            let close = base_close + (i % 7) as f64;
            PriceBar {
                date: start + chrono::Days::new(i as u64),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 10_000 + i as i64,
            }
        })
        .collect()
}

pub fn annual(year: &str, revenue: f64, net_profit: f64) -> AnnualPoint {
    AnnualPoint {
        year: year.into(),
        revenue,
        net_profit,
    }
}

pub struct MockDataPort {
    pub data: HashMap<String, Vec<PriceBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, code: &str, bars: Vec<PriceBar>) -> Self {
        self.data.insert(code.to_string(), bars);
        self
    }

    pub fn with_error(mut self, code: &str, reason: &str) -> Self {
        self.errors.insert(code.to_string(), reason.to_string());
        self
    }
}

impl MarketDataPort for MockDataPort {
    fn fetch_bars(
        &self,
        code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, StocklensError> {
        if let Some(reason) = self.errors.get(code) {
            return Err(StocklensError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self
            .data
            .get(code)
            .map(|bars| {
                bars.iter()
                    .filter(|b| b.date >= start_date && b.date <= end_date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn list_codes(&self) -> Result<Vec<String>, StocklensError> {
        let mut codes: Vec<String> = self.data.keys().cloned().collect();
        codes.sort();
        Ok(codes)
    }
}

pub struct MockReportPort {
    pub snapshots: HashMap<String, FinancialSnapshot>,
    pub forecasts: HashMap<String, ForecastPayload>,
}

impl MockReportPort {
    pub fn new() -> Self {
        Self {
            snapshots: HashMap::new(),
            forecasts: HashMap::new(),
        }
    }

    pub fn with_snapshot(mut self, code: &str, snapshot: FinancialSnapshot) -> Self {
        self.snapshots.insert(code.to_string(), snapshot);
        self
    }

    pub fn with_forecast(mut self, code: &str, payload: ForecastPayload) -> Self {
        self.forecasts.insert(code.to_string(), payload);
        self
    }
}

impl ReportPort for MockReportPort {
    fn fetch_snapshot(&self, code: &str) -> Result<FinancialSnapshot, StocklensError> {
        self.snapshots
            .get(code)
            .cloned()
            .ok_or_else(|| StocklensError::Report {
                reason: format!("no snapshot for {code}"),
            })
    }

    fn fetch_forecast(&self, code: &str) -> Result<Option<ForecastPayload>, StocklensError> {
        Ok(self.forecasts.get(code).cloned())
    }
}
