//! CSV price-bar adapter.
//!
//! One file per code, `{code}.csv`, with a
//! `date,open,high,low,close,volume` header. Rows deserialize straight into
//! [`PriceBar`]; rows outside the requested range are skipped.

use crate::domain::error::StocklensError;
use crate::domain::ohlcv::PriceBar;
use crate::ports::data_port::MarketDataPort;
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct CsvBarAdapter {
    base_path: PathBuf,
}

impl CsvBarAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, code: &str) -> PathBuf {
        self.base_path.join(format!("{code}.csv"))
    }
}

impl MarketDataPort for CsvBarAdapter {
    fn fetch_bars(
        &self,
        code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, StocklensError> {
        let path = self.csv_path(code);
        if !path.exists() {
            return Err(StocklensError::NoData {
                code: code.to_string(),
            });
        }

        let mut reader = csv::Reader::from_path(&path).map_err(|e| StocklensError::Data {
            reason: format!("failed to open {}: {}", path.display(), e),
        })?;

        let mut bars = Vec::new();
        for row in reader.deserialize::<PriceBar>() {
            let bar = row.map_err(|e| StocklensError::Data {
                reason: format!("bad row in {}: {}", path.display(), e),
            })?;
            if bar.date < start_date || bar.date > end_date {
                continue;
            }
            bars.push(bar);
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }

    fn list_codes(&self) -> Result<Vec<String>, StocklensError> {
        let entries = std::fs::read_dir(&self.base_path).map_err(|e| StocklensError::Data {
            reason: format!("failed to read {}: {}", self.base_path.display(), e),
        })?;

        let mut codes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StocklensError::Data {
                reason: format!("directory entry error: {e}"),
            })?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if let Some(code) = name.strip_suffix(".csv") {
                codes.push(code.to_string());
            }
        }

        codes.sort();
        Ok(codes)
    }
}
