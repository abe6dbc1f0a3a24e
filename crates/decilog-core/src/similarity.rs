//! Similarity heuristic for the "similar decisions" feature
//!
//! Ranks a candidate pool against a reference decision using a weighted
//! category/impact-score distance. The scorer is a plain function pointer so
//! a learned model could later be substituted without changing the
//! surrounding contract.

use serde::Serialize;

use crate::model::Decision;

/// Scoring strategy: maps (reference, candidate) to a similarity in [0, 1]
pub type SimilarityScorer = fn(&Decision, &Decision) -> f64;

/// Candidates scoring at or below this value are discarded
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

/// Maximum number of similar decisions returned
pub const MAX_SIMILAR: usize = 5;

/// A candidate decision with its computed similarity attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDecision {
    #[serde(flatten)]
    pub decision: Decision,
    pub similarity: f64,
}

/// Default weighted similarity: 0.7 for a category match plus up to 0.3 for
/// impact-score closeness
///
/// With impact scores guaranteed in [1, 10], the distance term stays within
/// [0.1, 0.3], so the score is never negative and tops out at 1.0 for an
/// exact category-and-score match.
pub fn weighted_similarity(reference: &Decision, candidate: &Decision) -> f64 {
    let category_match = if candidate.category == reference.category {
        1.0
    } else {
        0.0
    };
    let impact_diff = (candidate.impact_score - reference.impact_score).abs();
    0.7 * category_match + 0.3 * (1.0 - impact_diff / 10.0)
}

/// Rank the pool by similarity to the reference decision
///
/// The reference itself is excluded by id. Survivors are sorted descending
/// (stable, so pool order breaks ties) and truncated to the top
/// [`MAX_SIMILAR`].
pub fn similar_decisions(
    reference: &Decision,
    pool: &[Decision],
    scorer: SimilarityScorer,
) -> Vec<ScoredDecision> {
    let mut scored: Vec<ScoredDecision> = pool
        .iter()
        .filter(|d| d.id != reference.id)
        .map(|d| ScoredDecision {
            decision: d.clone(),
            similarity: scorer(reference, d),
        })
        .filter(|s| s.similarity > SIMILARITY_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(MAX_SIMILAR);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AffectedArea, Category, DecisionContent, DecisionStatus, Outcomes, Stakeholders,
    };

    fn decision(id: &str, category: Category, impact: f64) -> Decision {
        Decision::new(
            id.to_string(),
            DecisionContent {
                title: format!("Decision {id}"),
                description: "desc".to_string(),
                rationale: "why".to_string(),
                category,
                impact_score: impact,
                urgency_level: 2.0,
                confidence_level: 6.0,
                current_mood: 3.0,
                affected_areas: vec![AffectedArea::Career],
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
        )
    }

    #[test]
    fn test_exact_match_scores_one() {
        let reference = decision("ref", Category::Career, 7.0);
        let candidate = decision("a", Category::Career, 7.0);

        let score = weighted_similarity(&reference, &candidate);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_far_candidate_excluded() {
        let reference = decision("ref", Category::Career, 7.0);
        let far = decision("b", Category::Financial, 1.0);

        // 0.7 * 0 + 0.3 * (1 - 6/10) = 0.12, below the 0.5 threshold
        let score = weighted_similarity(&reference, &far);
        assert!((score - 0.12).abs() < 1e-9);

        let ranked = similar_decisions(&reference, &[far], weighted_similarity);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_reference_excluded_by_id() {
        let reference = decision("ref", Category::Career, 7.0);
        let pool = vec![reference.clone(), decision("a", Category::Career, 7.0)];

        let ranked = similar_decisions(&reference, &pool, weighted_similarity);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].decision.id, "a");
    }

    #[test]
    fn test_sorted_descending_and_truncated_to_five() {
        let reference = decision("ref", Category::Career, 7.0);
        let pool: Vec<Decision> = (0..8)
            .map(|i| decision(&format!("c{i}"), Category::Career, (i + 2) as f64))
            .collect();

        let ranked = similar_decisions(&reference, &pool, weighted_similarity);
        assert_eq!(ranked.len(), MAX_SIMILAR);
        for pair in ranked.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
        // c5 has impact 7, an exact match
        assert_eq!(ranked[0].decision.id, "c5");
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let reference = decision("ref", Category::Career, 7.0);
        let pool = vec![
            decision("first", Category::Career, 6.0),
            decision("second", Category::Career, 8.0), // same |diff| = 1
        ];

        let ranked = similar_decisions(&reference, &pool, weighted_similarity);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].decision.id, "first");
        assert_eq!(ranked[1].decision.id, "second");
    }

    #[test]
    fn test_scored_decision_serializes_flat() {
        let reference = decision("ref", Category::Career, 7.0);
        let candidate = decision("a", Category::Career, 7.0);
        let ranked = similar_decisions(&reference, &[candidate], weighted_similarity);

        let json = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["similarity"], 1.0);
        assert_eq!(json["impactScore"], 7.0);
    }
}
