//! Seed command
//!
//! Usage: decilog seed [--db PATH] [--count N]
//!
//! Inserts sample decisions for local development. Samples cycle through the
//! category and score ranges so list filters, analytics buckets and the
//! similarity lookup all have data to work with.

use clap::Args;
use decilog_core::rules::{DecisionInput, OutcomesInput, StakeholdersInput};
use decilog_store::repo::DecisionRepo;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// SQLite database path (falls back to DECILOG_DB, then decilog.db)
    #[arg(long)]
    pub db: Option<String>,

    /// Number of sample decisions to insert
    #[arg(long, default_value_t = 12)]
    pub count: usize,
}

pub fn execute(args: SeedArgs) -> anyhow::Result<()> {
    let db_path = args
        .db
        .or_else(|| std::env::var("DECILOG_DB").ok())
        .unwrap_or_else(|| "decilog.db".to_string());

    let mut conn = decilog_store::db::open(&db_path)?;
    decilog_store::db::configure(&conn)?;
    decilog_store::migrations::apply_migrations(&mut conn)?;

    for i in 0..args.count {
        DecisionRepo::create(&conn, &sample(i))?;
    }

    println!("Seeded {} decisions into {db_path}", args.count);
    Ok(())
}

fn sample(i: usize) -> DecisionInput {
    let categories = [
        "career",
        "financial",
        "health",
        "personal",
        "education",
        "relationships",
        "professional",
    ];
    let areas = [
        "career",
        "financial",
        "wellbeing",
        "productivity",
        "relationships",
        "security",
    ];

    DecisionInput {
        title: Some(format!("Sample decision {}", i + 1)),
        description: Some("Seeded record for local development".to_string()),
        rationale: Some("Exercises filters, analytics and similarity".to_string()),
        category: Some(categories[i % categories.len()].to_string()),
        impact_score: Some((i % 10 + 1) as f64),
        urgency_level: Some((i % 5 + 1) as f64),
        confidence_level: Some((i * 3 % 10 + 1) as f64),
        current_mood: Some((i * 2 % 5 + 1) as f64),
        affected_areas: Some(vec![areas[i % areas.len()].to_string()]),
        stakeholders: Some(StakeholdersInput {
            key_stakeholders: Some("Just me".to_string()),
            impact_analysis: Some("Limited blast radius".to_string()),
            communication_plan: Some("None needed".to_string()),
        }),
        outcomes: Some(OutcomesInput {
            expected: Some("Things improve".to_string()),
            actual: None,
            success_metrics: Some("Revisit in a month".to_string()),
            potential_risks: Some("Wasted effort".to_string()),
            risk_mitigation: Some("Keep the change small".to_string()),
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decilog_core::rules::validate_decision;

    #[test]
    fn test_every_sample_validates() {
        for i in 0..40 {
            assert!(
                validate_decision(&sample(i)).is_ok(),
                "sample {i} failed validation"
            );
        }
    }

    #[test]
    fn test_samples_cover_all_risk_buckets() {
        let scores: Vec<f64> = (0..12).map(|i| sample(i).impact_score.unwrap()).collect();
        assert!(scores.iter().any(|s| *s >= 8.0));
        assert!(scores.iter().any(|s| *s >= 5.0 && *s < 8.0));
        assert!(scores.iter().any(|s| *s < 5.0));
    }
}
