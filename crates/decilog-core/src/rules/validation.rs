//! Decision record validation
//!
//! Given a candidate payload (full create, or a partial update merged onto
//! the existing record), these functions determine whether it satisfies the
//! data model invariants and produce one human-readable violation per
//! offending field instead of failing on the first problem.
//!
//! On success the validator returns normalized content: trimmed strings,
//! typed enumerations, deduplicated lower-cased affected areas, and defaults
//! applied for status and the boolean flags. Validation is a pure function
//! over its input plus the fixed enumerations; it never touches storage.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::model::{
    AffectedArea, Category, DecisionContent, DecisionStatus, GoalContent, Outcomes,
    ProjectContent, Stakeholders,
};

/// Maximum length for decision titles
const TITLE_MAX: usize = 200;
/// Maximum length for free-text fields (descriptions, rationale, outcome text)
const TEXT_MAX: usize = 1000;
/// Maximum length for the key-stakeholders field
const KEY_STAKEHOLDERS_MAX: usize = 500;

/// A single field-level constraint violation
///
/// Field names in messages use the wire (camelCase) spelling so API clients
/// can match them against the payload they sent. Over-length strings are
/// reported as `OutOfRange` over the character count.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    #[error("{field} is required")]
    RequiredFieldMissing { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field}: invalid value '{value}'")]
    InvalidEnum { field: &'static str, value: String },

    #[error("{field} must contain at least one entry")]
    EmptyCollection { field: &'static str },
}

/// Candidate decision payload with every field optional
///
/// This is both the create body and the patch body: for creates it is
/// validated directly, for updates it is merged onto the stored record via
/// [`DecisionInput::merged_onto`] and the merged whole is re-validated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rationale: Option<String>,
    pub category: Option<String>,
    pub impact_score: Option<f64>,
    pub urgency_level: Option<f64>,
    pub confidence_level: Option<f64>,
    pub current_mood: Option<f64>,
    pub affected_areas: Option<Vec<String>>,
    pub stakeholders: Option<StakeholdersInput>,
    pub outcomes: Option<OutcomesInput>,
    pub deadline: Option<DateTime<Utc>>,
    pub approval_required: Option<bool>,
    pub backup_plan: Option<bool>,
    pub status: Option<String>,
}

/// Candidate stakeholder composite
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StakeholdersInput {
    pub key_stakeholders: Option<String>,
    pub impact_analysis: Option<String>,
    pub communication_plan: Option<String>,
}

/// Candidate outcome composite
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutcomesInput {
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub success_metrics: Option<String>,
    pub potential_risks: Option<String>,
    pub risk_mitigation: Option<String>,
}

impl DecisionInput {
    /// Merge this partial payload onto an existing record, field by field
    ///
    /// Omitted fields retain their prior value. Nested composites merge
    /// sub-field-by-sub-field; supplying every sub-field therefore replaces
    /// the composite wholesale. Optional fields cannot be cleared through a
    /// patch (absence means "keep").
    pub fn merged_onto(self, existing: &crate::model::Decision) -> DecisionInput {
        let stakeholders = {
            let patch = self.stakeholders.unwrap_or_default();
            StakeholdersInput {
                key_stakeholders: patch
                    .key_stakeholders
                    .or_else(|| Some(existing.stakeholders.key_stakeholders.clone())),
                impact_analysis: patch
                    .impact_analysis
                    .or_else(|| Some(existing.stakeholders.impact_analysis.clone())),
                communication_plan: patch
                    .communication_plan
                    .or_else(|| Some(existing.stakeholders.communication_plan.clone())),
            }
        };

        let outcomes = {
            let patch = self.outcomes.unwrap_or_default();
            OutcomesInput {
                expected: patch
                    .expected
                    .or_else(|| Some(existing.outcomes.expected.clone())),
                actual: patch.actual.or_else(|| existing.outcomes.actual.clone()),
                success_metrics: patch
                    .success_metrics
                    .or_else(|| Some(existing.outcomes.success_metrics.clone())),
                potential_risks: patch
                    .potential_risks
                    .or_else(|| Some(existing.outcomes.potential_risks.clone())),
                risk_mitigation: patch
                    .risk_mitigation
                    .or_else(|| Some(existing.outcomes.risk_mitigation.clone())),
            }
        };

        DecisionInput {
            title: self.title.or_else(|| Some(existing.title.clone())),
            description: self
                .description
                .or_else(|| Some(existing.description.clone())),
            rationale: self.rationale.or_else(|| Some(existing.rationale.clone())),
            category: self
                .category
                .or_else(|| Some(existing.category.as_str().to_string())),
            impact_score: self.impact_score.or(Some(existing.impact_score)),
            urgency_level: self.urgency_level.or(Some(existing.urgency_level)),
            confidence_level: self.confidence_level.or(Some(existing.confidence_level)),
            current_mood: self.current_mood.or(Some(existing.current_mood)),
            affected_areas: self.affected_areas.or_else(|| {
                Some(
                    existing
                        .affected_areas
                        .iter()
                        .map(|a| a.as_str().to_string())
                        .collect(),
                )
            }),
            stakeholders: Some(stakeholders),
            outcomes: Some(outcomes),
            deadline: self.deadline.or(existing.deadline),
            approval_required: self.approval_required.or(Some(existing.approval_required)),
            backup_plan: self.backup_plan.or(Some(existing.backup_plan)),
            status: self
                .status
                .or_else(|| Some(existing.status.as_str().to_string())),
        }
    }
}

/// Candidate goal payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub progress: Option<f64>,
    pub decisions: Option<Vec<String>>,
}

/// Candidate project payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub progress: Option<f64>,
    pub team: Option<i64>,
    pub decisions: Option<Vec<String>>,
}

/// Validate a candidate decision payload against the data model invariants
///
/// Collects every violation rather than short-circuiting on the first one.
///
/// # Errors
///
/// Returns the complete violation list when any field is missing, blank,
/// out of range, or outside its enumeration.
pub fn validate_decision(
    input: &DecisionInput,
) -> std::result::Result<DecisionContent, Vec<Violation>> {
    let mut violations = Vec::new();

    let title = required_text(&input.title, "title", TITLE_MAX, &mut violations);
    let description = required_text(&input.description, "description", TEXT_MAX, &mut violations);
    let rationale = required_text(&input.rationale, "rationale", TEXT_MAX, &mut violations);

    let category = required_enum::<Category>(&input.category, "category", &mut violations);

    let impact_score = required_score(
        &input.impact_score,
        "impactScore",
        1.0,
        10.0,
        &mut violations,
    );
    let urgency_level = required_score(
        &input.urgency_level,
        "urgencyLevel",
        1.0,
        5.0,
        &mut violations,
    );
    let confidence_level = required_score(
        &input.confidence_level,
        "confidenceLevel",
        1.0,
        10.0,
        &mut violations,
    );
    let current_mood = required_score(&input.current_mood, "currentMood", 1.0, 5.0, &mut violations);

    let affected_areas = normalize_affected_areas(&input.affected_areas, &mut violations);

    let stakeholders = validate_stakeholders(input.stakeholders.as_ref(), &mut violations);
    let outcomes = validate_outcomes(input.outcomes.as_ref(), &mut violations);

    let status = match &input.status {
        None => Some(DecisionStatus::default()),
        Some(raw) => match raw.parse::<DecisionStatus>() {
            Ok(status) => Some(status),
            Err(()) => {
                violations.push(Violation::InvalidEnum {
                    field: "status",
                    value: raw.clone(),
                });
                None
            }
        },
    };

    if violations.is_empty() {
        // Every None above pushed a violation, so all values are present here
        if let (
            Some(title),
            Some(description),
            Some(rationale),
            Some(category),
            Some(impact_score),
            Some(urgency_level),
            Some(confidence_level),
            Some(current_mood),
            Some(stakeholders),
            Some(outcomes),
            Some(status),
        ) = (
            title,
            description,
            rationale,
            category,
            impact_score,
            urgency_level,
            confidence_level,
            current_mood,
            stakeholders,
            outcomes,
            status,
        ) {
            return Ok(DecisionContent {
                title,
                description,
                rationale,
                category,
                impact_score,
                urgency_level,
                confidence_level,
                current_mood,
                affected_areas,
                stakeholders,
                outcomes,
                deadline: input.deadline,
                approval_required: input.approval_required.unwrap_or(false),
                backup_plan: input.backup_plan.unwrap_or(false),
                status,
            });
        }
    }

    Err(violations)
}

/// Validate a candidate goal payload
///
/// # Errors
///
/// Returns the complete violation list when the title is missing/blank or
/// progress falls outside [0, 100].
pub fn validate_goal(input: &GoalInput) -> std::result::Result<GoalContent, Vec<Violation>> {
    let mut violations = Vec::new();

    let title = required_text(&input.title, "title", TITLE_MAX, &mut violations);
    let description = optional_text(&input.description, "description", TEXT_MAX, &mut violations);
    let progress = optional_range(&input.progress, "progress", 0.0, 100.0, 0.0, &mut violations);

    match (title, progress) {
        (Some(title), Some(progress)) if violations.is_empty() => Ok(GoalContent {
            title,
            description,
            deadline: input.deadline,
            progress,
            decisions: normalize_decision_refs(&input.decisions),
        }),
        _ => Err(violations),
    }
}

/// Validate a candidate project payload
///
/// # Errors
///
/// Returns the complete violation list when the name is missing/blank or
/// progress falls outside [0, 100].
pub fn validate_project(
    input: &ProjectInput,
) -> std::result::Result<ProjectContent, Vec<Violation>> {
    let mut violations = Vec::new();

    let name = required_text(&input.name, "name", TITLE_MAX, &mut violations);
    let description = optional_text(&input.description, "description", TEXT_MAX, &mut violations);
    let progress = optional_range(&input.progress, "progress", 0.0, 100.0, 0.0, &mut violations);

    match (name, progress) {
        (Some(name), Some(progress)) if violations.is_empty() => Ok(ProjectContent {
            name,
            description,
            deadline: input.deadline,
            progress,
            team: input.team.unwrap_or(0),
            decisions: normalize_decision_refs(&input.decisions),
        }),
        _ => Err(violations),
    }
}

fn required_text(
    value: &Option<String>,
    field: &'static str,
    max_len: usize,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    match value {
        None => {
            violations.push(Violation::RequiredFieldMissing { field });
            None
        }
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                violations.push(Violation::RequiredFieldMissing { field });
                None
            } else if trimmed.chars().count() > max_len {
                violations.push(Violation::OutOfRange {
                    field,
                    min: 1.0,
                    max: max_len as f64,
                });
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

fn optional_text(
    value: &Option<String>,
    field: &'static str,
    max_len: usize,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    let raw = value.as_deref()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.chars().count() > max_len {
        violations.push(Violation::OutOfRange {
            field,
            min: 0.0,
            max: max_len as f64,
        });
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn required_score(
    value: &Option<f64>,
    field: &'static str,
    min: f64,
    max: f64,
    violations: &mut Vec<Violation>,
) -> Option<f64> {
    match value {
        None => {
            violations.push(Violation::RequiredFieldMissing { field });
            None
        }
        Some(n) if !n.is_finite() || *n < min || *n > max => {
            violations.push(Violation::OutOfRange { field, min, max });
            None
        }
        Some(n) => Some(*n),
    }
}

fn optional_range(
    value: &Option<f64>,
    field: &'static str,
    min: f64,
    max: f64,
    default: f64,
    violations: &mut Vec<Violation>,
) -> Option<f64> {
    match value {
        None => Some(default),
        Some(n) if !n.is_finite() || *n < min || *n > max => {
            violations.push(Violation::OutOfRange { field, min, max });
            None
        }
        Some(n) => Some(*n),
    }
}

fn required_enum<T: std::str::FromStr<Err = ()>>(
    value: &Option<String>,
    field: &'static str,
    violations: &mut Vec<Violation>,
) -> Option<T> {
    match value {
        None => {
            violations.push(Violation::RequiredFieldMissing { field });
            None
        }
        Some(raw) => match raw.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(()) => {
                violations.push(Violation::InvalidEnum {
                    field,
                    value: raw.clone(),
                });
                None
            }
        },
    }
}

/// Normalize affectedAreas to a deduplicated list of typed areas
///
/// The canonical wire representation is an array of strings; entries are
/// trimmed, lower-cased and deduplicated preserving first-seen order.
fn normalize_affected_areas(
    value: &Option<Vec<String>>,
    violations: &mut Vec<Violation>,
) -> Vec<AffectedArea> {
    let entries: Vec<String> = value
        .iter()
        .flatten()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() {
        violations.push(Violation::EmptyCollection {
            field: "affectedAreas",
        });
        return Vec::new();
    }

    let mut areas = Vec::new();
    for entry in entries {
        match entry.parse::<AffectedArea>() {
            Ok(area) => {
                if !areas.contains(&area) {
                    areas.push(area);
                }
            }
            Err(()) => violations.push(Violation::InvalidEnum {
                field: "affectedAreas",
                value: entry,
            }),
        }
    }
    areas
}

fn validate_stakeholders(
    input: Option<&StakeholdersInput>,
    violations: &mut Vec<Violation>,
) -> Option<Stakeholders> {
    let empty = StakeholdersInput::default();
    let input = input.unwrap_or(&empty);

    let key_stakeholders = required_text(
        &input.key_stakeholders,
        "stakeholders.keyStakeholders",
        KEY_STAKEHOLDERS_MAX,
        violations,
    );
    let impact_analysis = required_text(
        &input.impact_analysis,
        "stakeholders.impactAnalysis",
        TEXT_MAX,
        violations,
    );
    let communication_plan = required_text(
        &input.communication_plan,
        "stakeholders.communicationPlan",
        TEXT_MAX,
        violations,
    );

    match (key_stakeholders, impact_analysis, communication_plan) {
        (Some(key_stakeholders), Some(impact_analysis), Some(communication_plan)) => {
            Some(Stakeholders {
                key_stakeholders,
                impact_analysis,
                communication_plan,
            })
        }
        _ => None,
    }
}

fn validate_outcomes(
    input: Option<&OutcomesInput>,
    violations: &mut Vec<Violation>,
) -> Option<Outcomes> {
    let empty = OutcomesInput::default();
    let input = input.unwrap_or(&empty);

    let expected = required_text(&input.expected, "outcomes.expected", TEXT_MAX, violations);
    let actual = optional_text(&input.actual, "outcomes.actual", TEXT_MAX, violations);
    let success_metrics = required_text(
        &input.success_metrics,
        "outcomes.successMetrics",
        TEXT_MAX,
        violations,
    );
    let potential_risks = required_text(
        &input.potential_risks,
        "outcomes.potentialRisks",
        TEXT_MAX,
        violations,
    );
    let risk_mitigation = required_text(
        &input.risk_mitigation,
        "outcomes.riskMitigation",
        TEXT_MAX,
        violations,
    );

    match (expected, success_metrics, potential_risks, risk_mitigation) {
        (Some(expected), Some(success_metrics), Some(potential_risks), Some(risk_mitigation)) => {
            Some(Outcomes {
                expected,
                actual,
                success_metrics,
                potential_risks,
                risk_mitigation,
            })
        }
        _ => None,
    }
}

fn normalize_decision_refs(value: &Option<Vec<String>>) -> Vec<String> {
    value
        .iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
