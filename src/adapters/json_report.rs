//! JSON report adapter.
//!
//! Snapshots live at `{code}_report.json`, forecasts at
//! `{code}_forecast.json`. A missing report is an error; a missing forecast
//! is an expected state (`Ok(None)`) since not every code has been through
//! the AI cycle.

use crate::domain::error::StocklensError;
use crate::domain::forecast::ForecastPayload;
use crate::domain::snapshot::FinancialSnapshot;
use crate::ports::report_port::ReportPort;
use std::fs;
use std::path::PathBuf;

pub struct JsonReportAdapter {
    base_path: PathBuf,
}

impl JsonReportAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &PathBuf,
    ) -> Result<T, StocklensError> {
        let content = fs::read_to_string(path).map_err(|e| StocklensError::Report {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        serde_json::from_str(&content).map_err(|e| StocklensError::Report {
            reason: format!("invalid JSON in {}: {}", path.display(), e),
        })
    }
}

impl ReportPort for JsonReportAdapter {
    fn fetch_snapshot(&self, code: &str) -> Result<FinancialSnapshot, StocklensError> {
        let path = self.base_path.join(format!("{code}_report.json"));
        self.read_json(&path)
    }

    fn fetch_forecast(&self, code: &str) -> Result<Option<ForecastPayload>, StocklensError> {
        let path = self.base_path.join(format!("{code}_forecast.json"));
        if !path.exists() {
            return Ok(None);
        }
        self.read_json(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fetch_snapshot_reads_partial_document() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("600519_report.json"),
            r#"{"scores": {"overall": 82}, "valuation": {"price": 1700.0}}"#,
        )
        .unwrap();

        let adapter = JsonReportAdapter::new(dir.path().to_path_buf());
        let snapshot = adapter.fetch_snapshot("600519").unwrap();
        assert_eq!(snapshot.scores.overall, Some(82.0));
        assert_eq!(snapshot.valuation.price, Some(1700.0));
        assert!(snapshot.fundamentals.roe.is_none());
    }

    #[test]
    fn missing_snapshot_is_an_error() {
        let dir = TempDir::new().unwrap();
        let adapter = JsonReportAdapter::new(dir.path().to_path_buf());
        assert!(adapter.fetch_snapshot("600519").is_err());
    }

    #[test]
    fn missing_forecast_is_none() {
        let dir = TempDir::new().unwrap();
        let adapter = JsonReportAdapter::new(dir.path().to_path_buf());
        assert!(adapter.fetch_forecast("600519").unwrap().is_none());
    }

    #[test]
    fn present_forecast_deserializes() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("600519_forecast.json"),
            r#"{"one_year_price": {"low": 1500, "mid": 1800, "high": 2100, "confidence": "medium"},
                "key_drivers": ["brand pricing power"]}"#,
        )
        .unwrap();

        let adapter = JsonReportAdapter::new(dir.path().to_path_buf());
        let payload = adapter.fetch_forecast("600519").unwrap().unwrap();
        assert_eq!(payload.one_year_price.unwrap().mid, 1800.0);
        assert_eq!(payload.key_drivers, vec!["brand pricing power"]);
    }

    #[test]
    fn corrupt_forecast_is_an_error_not_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("600519_forecast.json"), "{not json").unwrap();

        let adapter = JsonReportAdapter::new(dir.path().to_path_buf());
        assert!(adapter.fetch_forecast("600519").is_err());
    }
}
