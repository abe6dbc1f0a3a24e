//! Analytics aggregation over decision records
//!
//! Computes the summary consumed by dashboard and analytics views: totals,
//! risk buckets by impact score, and a trailing six-month trend. The
//! aggregator is a pure total function of its input list plus an explicit
//! reference instant, so results are deterministic and trivially testable.
//! Month boundaries use calendar-month granularity in UTC.

use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use serde::Serialize;

use crate::model::Decision;

/// Number of trailing calendar months in the trend window
const TREND_MONTHS: u32 = 6;

/// Impact score at or above which a decision counts as high risk
const HIGH_RISK_THRESHOLD: f64 = 8.0;
/// Impact score at or above which a decision counts as medium risk
const MEDIUM_RISK_THRESHOLD: f64 = 5.0;

/// Summary statistics over a set of decisions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionMetrics {
    pub total_decisions: usize,
    /// Mean impact score rounded to one decimal place; 0 for an empty input
    pub average_impact_score: f64,
    pub risk_analysis: RiskAnalysis,
    /// Trailing six calendar months ending at the current month, oldest first
    pub monthly_trends: Vec<MonthlyTrend>,
}

/// Risk bucket counts; every record falls into exactly one bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
}

/// One calendar month of the trend window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// Abbreviated month name ("Jan", "Feb", ...)
    pub month: String,
    pub count: usize,
    /// Mean impact score of the month's records, 0 if empty
    pub avg_impact: f64,
}

/// Compute summary metrics over an arbitrary set of decisions
///
/// `now` anchors the six-month trend window; pass `Utc::now()` in production
/// code and a fixed instant in tests.
pub fn calculate_decision_metrics(decisions: &[Decision], now: DateTime<Utc>) -> DecisionMetrics {
    let total = decisions.len();

    let average_impact_score = if total == 0 {
        0.0
    } else {
        round1(decisions.iter().map(|d| d.impact_score).sum::<f64>() / total as f64)
    };

    let mut risk_analysis = RiskAnalysis {
        high_risk: 0,
        medium_risk: 0,
        low_risk: 0,
    };
    for decision in decisions {
        if decision.impact_score >= HIGH_RISK_THRESHOLD {
            risk_analysis.high_risk += 1;
        } else if decision.impact_score >= MEDIUM_RISK_THRESHOLD {
            risk_analysis.medium_risk += 1;
        } else {
            risk_analysis.low_risk += 1;
        }
    }

    DecisionMetrics {
        total_decisions: total,
        average_impact_score,
        risk_analysis,
        monthly_trends: monthly_trends(decisions, now),
    }
}

fn monthly_trends(decisions: &[Decision], now: DateTime<Utc>) -> Vec<MonthlyTrend> {
    let current = month_start(now);

    (0..TREND_MONTHS)
        .rev()
        .map(|back| {
            let start = current
                .checked_sub_months(Months::new(back))
                .unwrap_or(current);
            let end = start
                .checked_add_months(Months::new(1))
                .unwrap_or(start);

            let scores: Vec<f64> = decisions
                .iter()
                .filter(|d| d.created_at >= start && d.created_at < end)
                .map(|d| d.impact_score)
                .collect();

            let avg_impact = if scores.is_empty() {
                0.0
            } else {
                round1(scores.iter().sum::<f64>() / scores.len() as f64)
            };

            MonthlyTrend {
                month: start.format("%b").to_string(),
                count: scores.len(),
                avg_impact,
            }
        })
        .collect()
}

/// First instant of the calendar month containing `t`, in UTC
fn month_start(t: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(t.year(), t.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(t) // unreachable: UTC has no ambiguous local times
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AffectedArea, Category, DecisionContent, DecisionStatus, Outcomes, Stakeholders,
    };

    fn decision_with(id: &str, impact: f64, created_at: DateTime<Utc>) -> Decision {
        let mut decision = Decision::new(
            id.to_string(),
            DecisionContent {
                title: format!("Decision {id}"),
                description: "desc".to_string(),
                rationale: "why".to_string(),
                category: Category::Personal,
                impact_score: impact,
                urgency_level: 2.0,
                confidence_level: 6.0,
                current_mood: 3.0,
                affected_areas: vec![AffectedArea::Wellbeing],
                stakeholders: Stakeholders {
                    key_stakeholders: "me".to_string(),
                    impact_analysis: "low".to_string(),
                    communication_plan: "none".to_string(),
                },
                outcomes: Outcomes {
                    expected: "good".to_string(),
                    actual: None,
                    success_metrics: "done".to_string(),
                    potential_risks: "few".to_string(),
                    risk_mitigation: "n/a".to_string(),
                },
                deadline: None,
                approval_required: false,
                backup_plan: false,
                status: DecisionStatus::Active,
            },
        );
        decision.created_at = created_at;
        decision
    }

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let metrics = calculate_decision_metrics(&[], utc(2024, 6, 15));

        assert_eq!(metrics.total_decisions, 0);
        assert_eq!(metrics.average_impact_score, 0.0);
        assert_eq!(metrics.risk_analysis.high_risk, 0);
        assert_eq!(metrics.risk_analysis.medium_risk, 0);
        assert_eq!(metrics.risk_analysis.low_risk, 0);
        assert_eq!(metrics.monthly_trends.len(), 6);
        for trend in &metrics.monthly_trends {
            assert_eq!(trend.count, 0);
            assert_eq!(trend.avg_impact, 0.0);
        }
    }

    #[test]
    fn test_risk_buckets_and_average() {
        let now = utc(2024, 6, 15);
        let decisions: Vec<Decision> = [2.0, 5.0, 8.0, 9.0]
            .iter()
            .enumerate()
            .map(|(i, score)| decision_with(&format!("d{i}"), *score, now))
            .collect();

        let metrics = calculate_decision_metrics(&decisions, now);
        assert_eq!(metrics.total_decisions, 4);
        assert_eq!(metrics.average_impact_score, 6.0);
        assert_eq!(metrics.risk_analysis.high_risk, 2);
        assert_eq!(metrics.risk_analysis.medium_risk, 1);
        assert_eq!(metrics.risk_analysis.low_risk, 1);
    }

    #[test]
    fn test_monthly_bucketing() {
        let now = utc(2024, 6, 15);
        let decisions = vec![
            decision_with("a", 4.0, utc(2024, 6, 1)),  // current month
            decision_with("b", 8.0, utc(2024, 6, 30)), // current month
            decision_with("c", 6.0, utc(2024, 1, 31)), // oldest month in window
            decision_with("d", 9.0, utc(2023, 12, 31)), // outside the window
        ];

        let metrics = calculate_decision_metrics(&decisions, now);
        let trends = &metrics.monthly_trends;

        assert_eq!(trends.len(), 6);
        assert_eq!(trends[0].month, "Jan");
        assert_eq!(trends[0].count, 1);
        assert_eq!(trends[0].avg_impact, 6.0);
        assert_eq!(trends[5].month, "Jun");
        assert_eq!(trends[5].count, 2);
        assert_eq!(trends[5].avg_impact, 6.0);

        let bucketed: usize = trends.iter().map(|t| t.count).sum();
        assert_eq!(bucketed, 3, "record outside the window is in no bucket");
    }

    #[test]
    fn test_window_spans_year_boundary() {
        let now = utc(2024, 2, 10);
        let metrics = calculate_decision_metrics(&[], now);
        let labels: Vec<&str> = metrics
            .monthly_trends
            .iter()
            .map(|t| t.month.as_str())
            .collect();
        assert_eq!(labels, vec!["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let now = utc(2024, 6, 15);
        let decisions = vec![
            decision_with("a", 1.0, now),
            decision_with("b", 2.0, now),
            decision_with("c", 2.0, now),
        ];

        let metrics = calculate_decision_metrics(&decisions, now);
        assert_eq!(metrics.average_impact_score, 1.7);
    }
}
