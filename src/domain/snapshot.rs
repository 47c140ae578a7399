//! Fundamentals and valuation snapshot supplied by the report collaborator.
//!
//! Every leaf field is optional and absence is meaningful: a missing number
//! must never be read as zero. `#[serde(default)]` on each group keeps a
//! partially populated JSON document deserializable.

use serde::Deserialize;

/// Dimension scores on a 0–100 scale, or absent when the upstream analyzer
/// could not grade that dimension.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scores {
    pub growth: Option<f64>,
    pub profitability: Option<f64>,
    pub stability: Option<f64>,
    pub safety: Option<f64>,
    pub valuation: Option<f64>,
    pub overall: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Valuation {
    pub price: Option<f64>,
    pub pe_ttm: Option<f64>,
    pub pb: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub dcf_per_share: Option<f64>,
    /// Percentage gap between the DCF intrinsic-value estimate and price.
    pub dcf_margin_of_safety: Option<f64>,
    pub ddm_gordon: Option<f64>,
    pub ddm_two_stage: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Fundamentals {
    /// Revenue and net profit in 亿 (hundred million) units, as reported.
    pub revenue_yi: Option<f64>,
    pub net_profit_yi: Option<f64>,
    pub report_date: Option<String>,
    pub roe: Option<f64>,
    pub gross_margin: Option<f64>,
    pub net_margin: Option<f64>,
    pub debt_ratio: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CashFlow {
    pub latest_cfo_yi: Option<f64>,
}

/// Multi-year growth persistence category from the upstream analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentumCategory {
    #[serde(alias = "持续增长型")]
    Sustained,
    #[serde(alias = "波动增长型")]
    Volatile,
    #[serde(alias = "周期波动型")]
    Cyclical,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GrowthMomentum {
    pub summary: Option<MomentumCategory>,
}

/// One fiscal year of revenue and profit, oldest first in `annual_trend`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnnualPoint {
    pub year: String,
    pub revenue: f64,
    pub net_profit: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FinancialSnapshot {
    pub scores: Scores,
    pub valuation: Valuation,
    pub fundamentals: Fundamentals,
    pub cash_flow: CashFlow,
    pub growth_momentum: GrowthMomentum,
    pub annual_trend: Vec<AnnualPoint>,
}
