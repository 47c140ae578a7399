//! Market data port trait.

use crate::domain::error::StocklensError;
use crate::domain::ohlcv::PriceBar;
use chrono::NaiveDate;

/// Source of deduplicated, chronologically sorted price bars.
pub trait MarketDataPort {
    fn fetch_bars(
        &self,
        code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, StocklensError>;

    fn list_codes(&self) -> Result<Vec<String>, StocklensError>;
}
