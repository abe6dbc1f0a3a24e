//! Decision domain model
//!
//! A Decision is a recorded choice with structured impact/outcome metadata.
//! All required fields are guaranteed present and in range after creation;
//! construction goes through the validator in `rules::validation`, which
//! produces the `DecisionContent` this module consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed category enumeration for decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Professional,
    Financial,
    Health,
    Relationships,
    Career,
    Education,
}

impl Category {
    /// All allowed values, in canonical order
    pub const ALL: [Category; 7] = [
        Category::Personal,
        Category::Professional,
        Category::Financial,
        Category::Health,
        Category::Relationships,
        Category::Career,
        Category::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Professional => "professional",
            Category::Financial => "financial",
            Category::Health => "health",
            Category::Relationships => "relationships",
            Category::Career => "career",
            Category::Education => "education",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    Draft,
    Active,
    Completed,
    Archived,
}

impl DecisionStatus {
    pub const ALL: [DecisionStatus; 4] = [
        DecisionStatus::Draft,
        DecisionStatus::Active,
        DecisionStatus::Completed,
        DecisionStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Draft => "draft",
            DecisionStatus::Active => "active",
            DecisionStatus::Completed => "completed",
            DecisionStatus::Archived => "archived",
        }
    }
}

impl Default for DecisionStatus {
    fn default() -> Self {
        DecisionStatus::Active
    }
}

impl FromStr for DecisionStatus {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DecisionStatus::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Life/work domain a decision touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffectedArea {
    Financial,
    Productivity,
    Wellbeing,
    Relationships,
    Career,
    Security,
}

impl AffectedArea {
    pub const ALL: [AffectedArea; 6] = [
        AffectedArea::Financial,
        AffectedArea::Productivity,
        AffectedArea::Wellbeing,
        AffectedArea::Relationships,
        AffectedArea::Career,
        AffectedArea::Security,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AffectedArea::Financial => "financial",
            AffectedArea::Productivity => "productivity",
            AffectedArea::Wellbeing => "wellbeing",
            AffectedArea::Relationships => "relationships",
            AffectedArea::Career => "career",
            AffectedArea::Security => "security",
        }
    }
}

impl FromStr for AffectedArea {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AffectedArea::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for AffectedArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stakeholder composite: three required free-text fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholders {
    pub key_stakeholders: String,
    pub impact_analysis: String,
    pub communication_plan: String,
}

/// Outcome composite: four required fields plus the optional actual outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcomes {
    pub expected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    pub success_metrics: String,
    pub potential_risks: String,
    pub risk_mitigation: String,
}

/// Validated decision content, ready to be attached to a record
///
/// Produced only by `rules::validation::validate_decision`; every field has
/// been normalized (trimmed, coerced, deduplicated) and checked against the
/// data model invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionContent {
    pub title: String,
    pub description: String,
    pub rationale: String,
    pub category: Category,
    pub impact_score: f64,
    pub urgency_level: f64,
    pub confidence_level: f64,
    pub current_mood: f64,
    pub affected_areas: Vec<AffectedArea>,
    pub stakeholders: Stakeholders,
    pub outcomes: Outcomes,
    pub deadline: Option<DateTime<Utc>>,
    pub approval_required: bool,
    pub backup_plan: bool,
    pub status: DecisionStatus,
}

/// A stored decision record
///
/// `id` and `created_at` are immutable after creation; `updated_at` is
/// refreshed on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Unique identifier (UUIDv7)
    pub id: String,

    pub title: String,
    pub description: String,
    pub rationale: String,
    pub category: Category,

    /// Impact score in [1, 10]
    pub impact_score: f64,
    /// Urgency level in [1, 5]
    pub urgency_level: f64,
    /// Confidence level in [1, 10]
    pub confidence_level: f64,
    /// Mood at recording time, in [1, 5]
    pub current_mood: f64,

    /// Non-empty list of affected life/work areas
    pub affected_areas: Vec<AffectedArea>,
    pub stakeholders: Stakeholders,
    pub outcomes: Outcomes,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub approval_required: bool,
    pub backup_plan: bool,
    pub status: DecisionStatus,

    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

/// Current UTC time truncated to millisecond precision
///
/// Timestamps are persisted as epoch milliseconds, so truncating at creation
/// keeps in-memory records byte-identical with their stored round trip.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

impl Decision {
    /// Create a new decision record from validated content
    pub fn new(id: String, content: DecisionContent) -> Self {
        let now = now_millis();
        Self {
            id,
            title: content.title,
            description: content.description,
            rationale: content.rationale,
            category: content.category,
            impact_score: content.impact_score,
            urgency_level: content.urgency_level,
            confidence_level: content.confidence_level,
            current_mood: content.current_mood,
            affected_areas: content.affected_areas,
            stakeholders: content.stakeholders,
            outcomes: content.outcomes,
            deadline: content.deadline,
            approval_required: content.approval_required,
            backup_plan: content.backup_plan,
            status: content.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the record's content after a validated merge, refreshing
    /// `updated_at` and preserving `id`/`created_at`
    pub fn apply(&mut self, content: DecisionContent) {
        self.title = content.title;
        self.description = content.description;
        self.rationale = content.rationale;
        self.category = content.category;
        self.impact_score = content.impact_score;
        self.urgency_level = content.urgency_level;
        self.confidence_level = content.confidence_level;
        self.current_mood = content.current_mood;
        self.affected_areas = content.affected_areas;
        self.stakeholders = content.stakeholders;
        self.outcomes = content.outcomes;
        self.deadline = content.deadline;
        self.approval_required = content.approval_required;
        self.backup_plan = content.backup_plan;
        self.status = content.status;
        self.updated_at = now_millis();
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decision({}, title={}, category={}, status={})",
            self.id, self.title, self.category, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_content() -> DecisionContent {
        DecisionContent {
            title: "Switch teams".to_string(),
            description: "Move from platform to product".to_string(),
            rationale: "Better growth path".to_string(),
            category: Category::Career,
            impact_score: 7.0,
            urgency_level: 3.0,
            confidence_level: 8.0,
            current_mood: 4.0,
            affected_areas: vec![AffectedArea::Career, AffectedArea::Wellbeing],
            stakeholders: Stakeholders {
                key_stakeholders: "Me, my manager".to_string(),
                impact_analysis: "Six months of ramp-up".to_string(),
                communication_plan: "1:1 next week".to_string(),
            },
            outcomes: Outcomes {
                expected: "Broader scope".to_string(),
                actual: None,
                success_metrics: "Shipping the new service".to_string(),
                potential_risks: "Losing domain knowledge".to_string(),
                risk_mitigation: "Document before leaving".to_string(),
            },
            deadline: None,
            approval_required: false,
            backup_plan: true,
            status: DecisionStatus::Active,
        }
    }

    #[test]
    fn test_decision_new() {
        let decision = Decision::new("d1".to_string(), sample_content());

        assert_eq!(decision.id, "d1");
        assert_eq!(decision.title, "Switch teams");
        assert_eq!(decision.status, DecisionStatus::Active);
        assert_eq!(decision.created_at, decision.updated_at);
    }

    #[test]
    fn test_decision_apply_preserves_created_at() {
        let mut decision = Decision::new("d1".to_string(), sample_content());
        let created_at = decision.created_at;
        std::thread::sleep(std::time::Duration::from_millis(10));

        let mut content = sample_content();
        content.status = DecisionStatus::Completed;
        decision.apply(content);

        assert_eq!(decision.status, DecisionStatus::Completed);
        assert_eq!(decision.created_at, created_at);
        assert!(decision.updated_at > created_at);
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("cooking".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_camel_case_wire_names() {
        let decision = Decision::new("d1".to_string(), sample_content());
        let json = serde_json::to_value(&decision).unwrap();

        assert_eq!(json["impactScore"], 7.0);
        assert_eq!(json["category"], "career");
        assert_eq!(json["affectedAreas"][0], "career");
        assert_eq!(json["stakeholders"]["keyStakeholders"], "Me, my manager");
        assert!(json["createdAt"].is_string());
    }
}
