//! Investment insight generation.
//!
//! Turns a [`FinancialSnapshot`](crate::domain::snapshot::FinancialSnapshot)
//! into a deterministic, explainable [`Insight`]: an overall rating, a
//! valuation status, a cash-flow health grade, derived growth rates, and two
//! bounded narrative lists. Every sub-computation is pure; running the
//! engine twice on the same snapshot yields identical output.

pub mod classify;
pub mod narrative;

use crate::domain::snapshot::FinancialSnapshot;

/// Display tone attached to a classification, consumed by the presentation
/// layer for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Strong,
    Positive,
    Neutral,
    Caution,
    Negative,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Strong => "strong",
            Tone::Positive => "positive",
            Tone::Neutral => "neutral",
            Tone::Caution => "caution",
            Tone::Negative => "negative",
        }
    }
}

/// Overall rating tier derived from the composite score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub label: &'static str,
    pub action: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuationStatus {
    pub label: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashFlowGrade {
    Excellent,
    Good,
    Fair,
    Poor,
    /// Missing inputs; distinct from a computed `Poor`.
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowHealth {
    pub grade: CashFlowGrade,
    pub label: &'static str,
    pub tone: Tone,
    pub description: String,
}

/// Year-over-year growth from the last two annual points. Absent entirely
/// when the trend is too short or the base revenue is zero; the profit leg
/// alone may be absent when the base profit is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthRates {
    pub revenue_pct: f64,
    pub profit_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub text: String,
    /// 1 = strongest signal, 2 = secondary.
    pub priority: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Medium,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Risk {
    pub text: String,
    pub level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub rating: Rating,
    pub valuation_status: ValuationStatus,
    pub cash_flow_health: CashFlowHealth,
    pub growth: Option<GrowthRates>,
    pub highlights: Vec<Highlight>,
    pub risks: Vec<Risk>,
}

/// Run the full classification cascade over one snapshot.
pub fn generate_insight(snapshot: &FinancialSnapshot) -> Insight {
    let growth = classify::derive_growth(&snapshot.annual_trend);
    let cash_flow_health =
        classify::cash_flow_health(&snapshot.cash_flow, &snapshot.fundamentals);

    let highlights = narrative::collect_highlights(snapshot, growth.as_ref(), &cash_flow_health);
    let risks = narrative::collect_risks(snapshot, growth.as_ref(), &cash_flow_health);

    Insight {
        rating: classify::rate_overall(&snapshot.scores),
        valuation_status: classify::valuation_status(&snapshot.valuation),
        cash_flow_health,
        growth,
        highlights,
        risks,
    }
}
