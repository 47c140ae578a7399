//! Classification rules: rating, valuation status, growth, cash-flow health.

use crate::domain::insight::{
    CashFlowGrade, CashFlowHealth, GrowthRates, Rating, Tone, ValuationStatus,
};
use crate::domain::snapshot::{AnnualPoint, CashFlow, Fundamentals, Scores, Valuation};

/// Rating tiers over the composite score. Boundaries are inclusive at the
/// lower bound; an absent score reads as 0 and lands in the bottom tier.
pub fn rate_overall(scores: &Scores) -> Rating {
    let overall = scores.overall.unwrap_or(0.0);

    if overall >= 80.0 {
        Rating {
            label: "strong buy",
            action: "fundamentals are broadly strong; consider building a position",
            tone: Tone::Strong,
        }
    } else if overall >= 70.0 {
        Rating {
            label: "buy",
            action: "quality is above average; accumulate on weakness",
            tone: Tone::Positive,
        }
    } else if overall >= 60.0 {
        Rating {
            label: "hold",
            action: "mixed picture; keep on the watchlist",
            tone: Tone::Neutral,
        }
    } else {
        Rating {
            label: "avoid",
            action: "weak composite score; look elsewhere",
            tone: Tone::Negative,
        }
    }
}

const DCF_MARGIN_BAND: f64 = 20.0;
const DDM_DISCOUNT_BAND: f64 = 0.8;
const DDM_PREMIUM_BAND: f64 = 1.2;

/// Tally independent under/over signals from the DCF margin of safety and
/// the two DDM estimates, then label by evidence count. Undervalued evidence
/// is checked strictly before overvalued evidence; the asymmetry is carried
/// over from the source system as-is.
pub fn valuation_status(valuation: &Valuation) -> ValuationStatus {
    let Some(price) = valuation.price else {
        return ValuationStatus {
            label: "indeterminate",
            tone: Tone::Neutral,
        };
    };

    let mut undervalued = 0;
    let mut overvalued = 0;

    if let Some(margin) = valuation.dcf_margin_of_safety {
        if margin > DCF_MARGIN_BAND {
            undervalued += 1;
        } else if margin < -DCF_MARGIN_BAND {
            overvalued += 1;
        }
    }

    for estimate in [valuation.ddm_gordon, valuation.ddm_two_stage]
        .into_iter()
        .flatten()
    {
        if price < estimate * DDM_DISCOUNT_BAND {
            undervalued += 1;
        } else if price > estimate * DDM_PREMIUM_BAND {
            overvalued += 1;
        }
    }

    if undervalued >= 2 {
        ValuationStatus {
            label: "clearly undervalued",
            tone: Tone::Strong,
        }
    } else if undervalued >= 1 {
        ValuationStatus {
            label: "relatively undervalued",
            tone: Tone::Positive,
        }
    } else if overvalued >= 2 {
        ValuationStatus {
            label: "clearly overvalued",
            tone: Tone::Negative,
        }
    } else if overvalued >= 1 {
        ValuationStatus {
            label: "relatively overvalued",
            tone: Tone::Caution,
        }
    } else {
        ValuationStatus {
            label: "fairly valued",
            tone: Tone::Neutral,
        }
    }
}

/// Year-over-year growth from the last two annual points.
///
/// Requires at least two points and a non-zero base revenue; otherwise the
/// whole record is absent rather than zeroed. A zero base profit leaves only
/// the profit leg absent.
pub fn derive_growth(annual_trend: &[AnnualPoint]) -> Option<GrowthRates> {
    if annual_trend.len() < 2 {
        return None;
    }
    let latest = &annual_trend[annual_trend.len() - 1];
    let prev = &annual_trend[annual_trend.len() - 2];

    if prev.revenue == 0.0 {
        return None;
    }

    let revenue_pct = (latest.revenue - prev.revenue) / prev.revenue * 100.0;
    let profit_pct = if prev.net_profit == 0.0 {
        None
    } else {
        Some((latest.net_profit - prev.net_profit) / prev.net_profit * 100.0)
    };

    Some(GrowthRates {
        revenue_pct,
        profit_pct,
    })
}

/// Operating-cash-flow coverage of net profit, graded on a fixed ladder.
/// Either input missing (or a zero profit base) is "insufficient data",
/// which is not the same verdict as "poor".
pub fn cash_flow_health(cash_flow: &CashFlow, fundamentals: &Fundamentals) -> CashFlowHealth {
    let (Some(cfo), Some(net_profit)) =
        (cash_flow.latest_cfo_yi, fundamentals.net_profit_yi)
    else {
        return insufficient("cash flow or profit figures unavailable");
    };
    if net_profit == 0.0 {
        return insufficient("net profit is zero; coverage ratio undefined");
    }

    let ratio = cfo / net_profit;
    let description = format!("operating cash flow covers {ratio:.2}x of net profit");

    let (grade, label, tone) = if ratio > 1.2 {
        (CashFlowGrade::Excellent, "excellent", Tone::Strong)
    } else if ratio > 0.8 {
        (CashFlowGrade::Good, "good", Tone::Positive)
    } else if ratio > 0.5 {
        (CashFlowGrade::Fair, "fair", Tone::Caution)
    } else {
        (CashFlowGrade::Poor, "poor", Tone::Negative)
    };

    CashFlowHealth {
        grade,
        label,
        tone,
        description,
    }
}

fn insufficient(description: &str) -> CashFlowHealth {
    CashFlowHealth {
        grade: CashFlowGrade::InsufficientData,
        label: "insufficient data",
        tone: Tone::Neutral,
        description: description.to_string(),
    }
}
