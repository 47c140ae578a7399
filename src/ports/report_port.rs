//! Report and forecast port trait.

use crate::domain::error::StocklensError;
use crate::domain::forecast::ForecastPayload;
use crate::domain::snapshot::FinancialSnapshot;

/// Source of fundamentals snapshots and AI forecast payloads. A forecast is
/// optional per code; a missing one is `Ok(None)`, not an error.
pub trait ReportPort {
    fn fetch_snapshot(&self, code: &str) -> Result<FinancialSnapshot, StocklensError>;

    fn fetch_forecast(&self, code: &str) -> Result<Option<ForecastPayload>, StocklensError>;
}
