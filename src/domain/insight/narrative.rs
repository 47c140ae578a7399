//! Highlight and risk narrative generation.
//!
//! Each rule fires independently off the snapshot and emits at most one
//! item. Highlights are stably sorted by priority and truncated to five;
//! risks keep their fixed evaluation order and are truncated to five,
//! never re-sorted.

use crate::domain::insight::{
    CashFlowGrade, CashFlowHealth, GrowthRates, Highlight, Risk, RiskLevel,
};
use crate::domain::snapshot::{FinancialSnapshot, MomentumCategory};

const MAX_ITEMS: usize = 5;

pub fn collect_highlights(
    snapshot: &FinancialSnapshot,
    growth: Option<&GrowthRates>,
    cash: &CashFlowHealth,
) -> Vec<Highlight> {
    let mut items = Vec::new();
    let fundamentals = &snapshot.fundamentals;
    let valuation = &snapshot.valuation;

    if let Some(roe) = fundamentals.roe {
        if roe > 20.0 {
            items.push(highlight(
                format!("ROE of {roe:.1}% shows outstanding capital returns"),
                1,
            ));
        } else if roe > 15.0 {
            items.push(highlight(format!("ROE of {roe:.1}% is solidly above average"), 2));
        }
    }

    if let Some(gross) = fundamentals.gross_margin {
        if gross > 50.0 {
            items.push(highlight(
                format!("gross margin of {gross:.1}% points to real pricing power"),
                1,
            ));
        } else if gross > 30.0 {
            items.push(highlight(
                format!("gross margin of {gross:.1}% suggests a competitive edge"),
                2,
            ));
        }
    }

    if let Some(debt) = fundamentals.debt_ratio {
        if debt < 30.0 {
            items.push(highlight(
                format!("conservative balance sheet with a {debt:.1}% debt ratio"),
                2,
            ));
        }
    }

    if let Some(growth) = growth {
        if growth.revenue_pct > 20.0 {
            items.push(highlight(
                format!("revenue grew {:.1}% year over year", growth.revenue_pct),
                1,
            ));
        } else if growth.revenue_pct > 10.0 {
            items.push(highlight(
                format!("revenue grew a healthy {:.1}%", growth.revenue_pct),
                2,
            ));
        }
    }

    if snapshot.growth_momentum.summary == Some(MomentumCategory::Sustained) {
        items.push(highlight(
            "multi-year record of uninterrupted revenue growth".to_string(),
            1,
        ));
    }

    if let Some(dividend) = valuation.dividend_yield {
        if dividend > 3.0 {
            items.push(highlight(
                format!("dividend yield of {dividend:.1}% rewards patient holders"),
                2,
            ));
        }
    }

    match cash.grade {
        CashFlowGrade::Excellent => items.push(highlight(
            format!("cash generation outruns reported profit ({})", cash.description),
            1,
        )),
        CashFlowGrade::Good => items.push(highlight(
            format!("profits are well backed by cash ({})", cash.description),
            2,
        )),
        _ => {}
    }

    if let Some(pe) = valuation.pe_ttm {
        if pe > 0.0 && pe < 15.0 {
            items.push(highlight(
                format!("trailing P/E of {pe:.1} leaves the valuation undemanding"),
                2,
            ));
        }
    }

    // Stable sort keeps evaluation order within a priority tier.
    items.sort_by_key(|item| item.priority);
    items.truncate(MAX_ITEMS);
    items
}

pub fn collect_risks(
    snapshot: &FinancialSnapshot,
    growth: Option<&GrowthRates>,
    cash: &CashFlowHealth,
) -> Vec<Risk> {
    let mut items = Vec::new();
    let fundamentals = &snapshot.fundamentals;
    let valuation = &snapshot.valuation;

    if let Some(pe) = valuation.pe_ttm {
        if pe > 50.0 {
            items.push(risk(
                format!("trailing P/E of {pe:.1} prices in flawless execution"),
                RiskLevel::High,
            ));
        }
    }

    if let Some(margin) = valuation.dcf_margin_of_safety {
        if margin < -20.0 {
            items.push(risk(
                format!("price sits {:.0}% above the DCF intrinsic estimate", -margin),
                RiskLevel::High,
            ));
        }
    }

    if let Some(roe) = fundamentals.roe {
        if roe < 5.0 {
            items.push(risk(
                format!("ROE of {roe:.1}% signals weak capital efficiency"),
                RiskLevel::Medium,
            ));
        }
    }

    if let Some(debt) = fundamentals.debt_ratio {
        if debt > 70.0 {
            items.push(risk(
                format!("debt ratio of {debt:.1}% leaves little financial headroom"),
                RiskLevel::High,
            ));
        } else if debt > 50.0 {
            items.push(risk(
                format!("debt ratio of {debt:.1}% is on the heavy side"),
                RiskLevel::Medium,
            ));
        }
    }

    if let Some(net) = fundamentals.net_margin {
        if net < 5.0 {
            items.push(risk(
                format!("net margin of {net:.1}% offers a thin profit cushion"),
                RiskLevel::Medium,
            ));
        }
    }

    if let Some(growth) = growth {
        if growth.revenue_pct < 0.0 {
            items.push(risk(
                format!("revenue shrank {:.1}% year over year", -growth.revenue_pct),
                RiskLevel::Medium,
            ));
        }
        if let Some(profit_pct) = growth.profit_pct {
            if profit_pct < 0.0 {
                items.push(risk(
                    format!("net profit declined {:.1}% year over year", -profit_pct),
                    RiskLevel::High,
                ));
            }
        }
    }

    if cash.grade == CashFlowGrade::Poor {
        items.push(risk(
            format!("reported profit is poorly backed by cash ({})", cash.description),
            RiskLevel::High,
        ));
    }

    if snapshot.growth_momentum.summary == Some(MomentumCategory::Cyclical) {
        items.push(risk(
            "growth has been cyclical rather than steady".to_string(),
            RiskLevel::Medium,
        ));
    }

    // Emission order is the contract: no sort.
    items.truncate(MAX_ITEMS);
    items
}

fn highlight(text: String, priority: u8) -> Highlight {
    Highlight { text, priority }
}

fn risk(text: String, level: RiskLevel) -> Risk {
    Risk { text, level }
}
