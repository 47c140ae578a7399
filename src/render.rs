//! Plain-text rendering of an analysis result.
//!
//! Kept out of the CLI so the report body is testable without process
//! plumbing. The engine owns the numbers; this module only formats them.

use crate::domain::forecast::ForecastPoint;
use crate::domain::insight::Insight;

pub fn render_insight(code: &str, insight: &Insight) -> String {
    let mut out = String::new();

    push_line(&mut out, &format!("=== {code} ==="));
    push_line(
        &mut out,
        &format!(
            "rating:     {} — {}",
            insight.rating.label, insight.rating.action
        ),
    );
    push_line(
        &mut out,
        &format!("valuation:  {}", insight.valuation_status.label),
    );
    push_line(
        &mut out,
        &format!(
            "cash flow:  {} ({})",
            insight.cash_flow_health.label, insight.cash_flow_health.description
        ),
    );

    match &insight.growth {
        Some(growth) => {
            let profit = match growth.profit_pct {
                Some(p) => format!("{p:+.1}%"),
                None => "n/a".to_string(),
            };
            push_line(
                &mut out,
                &format!(
                    "growth:     revenue {:+.1}%, profit {}",
                    growth.revenue_pct, profit
                ),
            );
        }
        None => push_line(&mut out, "growth:     n/a"),
    }

    if !insight.highlights.is_empty() {
        push_line(&mut out, "");
        push_line(&mut out, "highlights:");
        for item in &insight.highlights {
            push_line(&mut out, &format!("  [{}] {}", item.priority, item.text));
        }
    }

    if !insight.risks.is_empty() {
        push_line(&mut out, "");
        push_line(&mut out, "risks:");
        for item in &insight.risks {
            push_line(&mut out, &format!("  [{}] {}", item.level.as_str(), item.text));
        }
    }

    out
}

pub fn render_forecast(series: &[ForecastPoint], key_drivers: &[String]) -> String {
    let mut out = String::new();

    push_line(&mut out, "one-year forecast:");
    for point in series {
        push_line(
            &mut out,
            &format!(
                "  {:<9} {:.2} (range {:.2}–{:.2})",
                point.label.as_str(),
                point.price,
                point.range.0,
                point.range.1
            ),
        );
    }

    if !key_drivers.is_empty() {
        push_line(&mut out, "key drivers:");
        for driver in key_drivers {
            push_line(&mut out, &format!("  - {driver}"));
        }
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::{forecast_series, ForecastPayload, OneYearPrice};
    use crate::domain::insight::generate_insight;
    use crate::domain::snapshot::FinancialSnapshot;

    #[test]
    fn insight_report_names_every_section() {
        let mut snapshot = FinancialSnapshot::default();
        snapshot.scores.overall = Some(75.0);
        snapshot.fundamentals.roe = Some(25.0);
        let insight = generate_insight(&snapshot);

        let report = render_insight("600519", &insight);
        assert!(report.contains("=== 600519 ==="));
        assert!(report.contains("rating:     buy"));
        assert!(report.contains("valuation:  indeterminate"));
        assert!(report.contains("growth:     n/a"));
        assert!(report.contains("highlights:"));
        assert!(report.contains("ROE"));
    }

    #[test]
    fn forecast_report_shows_band_and_drivers() {
        let payload = ForecastPayload {
            one_year_price: Some(OneYearPrice {
                low: 90.0,
                mid: 100.0,
                high: 120.0,
                confidence: None,
            }),
            key_drivers: vec!["margin recovery".into()],
        };
        let series = forecast_series(Some(&payload), 95.0).unwrap();

        let report = render_forecast(&series, &payload.key_drivers);
        assert!(report.contains("current   95.00 (range 95.00–95.00)"));
        assert!(report.contains("forecast  100.00 (range 90.00–120.00)"));
        assert!(report.contains("- margin recovery"));
    }
}
