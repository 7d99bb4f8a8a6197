use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{AdopterStatus, DependencyStatus, EntityId, MilestoneStatus, RiskSeverity, RiskStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: EntityId,
    pub program_id: EntityId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub severity: RiskSeverity,
    #[serde(default)]
    pub status: RiskStatus,
    /// Impact rating, nominally 1-5.
    #[serde(default)]
    pub impact: Option<u8>,
    /// Probability rating, nominally 1-5.
    #[serde(default)]
    pub probability: Option<u8>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl Risk {
    pub fn is_critical(&self) -> bool {
        self.severity.is_critical()
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: EntityId,
    pub program_id: EntityId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: MilestoneStatus,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl Milestone {
    /// A milestone is overdue once its due date has passed without it
    /// reaching `completed`. Milestones without a due date are never overdue.
    pub fn is_overdue(&self, as_of: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => due < as_of && self.status != MilestoneStatus::Completed,
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub id: EntityId,
    pub program_id: EntityId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: DependencyStatus,
}

impl Dependency {
    pub fn is_blocked(&self) -> bool {
        self.status == DependencyStatus::Blocked
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adopter {
    pub id: EntityId,
    pub program_id: EntityId,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub status: AdopterStatus,
    /// Onboarding readiness, 0-100. Larger stored values are clamped.
    #[serde(default, deserialize_with = "deserialize_readiness")]
    pub readiness_score: u8,
}

impl Adopter {
    pub fn is_blocked(&self) -> bool {
        self.status == AdopterStatus::Blocked
    }

    /// Ready and completed adopters have finished onboarding work.
    pub fn is_ready(&self) -> bool {
        matches!(self.status, AdopterStatus::Ready | AdopterStatus::Completed)
    }
}

fn deserialize_readiness<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(raw.round().clamp(0.0, 100.0) as u8)
}

/// Top level of the JIRA-mirroring hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: EntityId,
    pub program_id: EntityId,
    #[serde(default)]
    pub title: String,
}

/// Business epic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bepic {
    pub id: EntityId,
    pub program_id: EntityId,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Epic {
    pub id: EntityId,
    pub program_id: EntityId,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: EntityId,
    pub program_id: EntityId,
    #[serde(default)]
    pub title: String,
}

/// Counts of hierarchy entities for one program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyCounts {
    pub steps: usize,
    pub business_epics: usize,
    pub epics: usize,
    pub stories: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
    }

    fn milestone(status: MilestoneStatus, due: Option<DateTime<Utc>>) -> Milestone {
        Milestone {
            id: 1,
            program_id: 1,
            title: "Beta".into(),
            status,
            due_date: due,
        }
    }

    #[test]
    fn past_due_incomplete_milestone_is_overdue() {
        let m = milestone(MilestoneStatus::InProgress, Some(at(1)));
        assert!(m.is_overdue(at(10)));
    }

    #[test]
    fn completed_milestone_is_never_overdue() {
        let m = milestone(MilestoneStatus::Completed, Some(at(1)));
        assert!(!m.is_overdue(at(10)));
    }

    #[test]
    fn unknown_status_is_overdue_only_when_due_date_proves_it() {
        assert!(milestone(MilestoneStatus::Unknown, Some(at(1))).is_overdue(at(10)));
        assert!(!milestone(MilestoneStatus::Unknown, Some(at(20))).is_overdue(at(10)));
        assert!(!milestone(MilestoneStatus::Unknown, None).is_overdue(at(10)));
    }

    #[test]
    fn due_exactly_now_is_not_overdue() {
        let m = milestone(MilestoneStatus::Delayed, Some(at(10)));
        assert!(!m.is_overdue(at(10)));
    }

    #[test]
    fn readiness_score_is_clamped_on_read() {
        let json = r#"{ "id": 1, "programId": 2, "readinessScore": 250 }"#;
        let adopter: Adopter = serde_json::from_str(json).unwrap();
        assert_eq!(adopter.readiness_score, 100);

        let json = r#"{ "id": 1, "programId": 2, "readinessScore": -4 }"#;
        let adopter: Adopter = serde_json::from_str(json).unwrap();
        assert_eq!(adopter.readiness_score, 0);

        let json = r#"{ "id": 1, "programId": 2, "readinessScore": 72.6 }"#;
        let adopter: Adopter = serde_json::from_str(json).unwrap();
        assert_eq!(adopter.readiness_score, 73);
    }

    #[test]
    fn missing_readiness_defaults_to_zero() {
        let json = r#"{ "id": 1, "programId": 2, "status": "blocked" }"#;
        let adopter: Adopter = serde_json::from_str(json).unwrap();
        assert_eq!(adopter.readiness_score, 0);
        assert!(adopter.is_blocked());
    }
}
