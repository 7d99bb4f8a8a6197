use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, ProgramStatus};

/// A tracked program.
///
/// Only `id` and `name` are required. Every other field may be absent, and
/// absence is what the completeness analysis looks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProgramStatus,
    #[serde(default)]
    pub owner_id: Option<EntityId>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub kpis: Vec<String>,
}

impl Program {
    /// Create a program with only its identity set.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            status: ProgramStatus::default(),
            owner_id: None,
            start_date: None,
            end_date: None,
            objectives: Vec::new(),
            kpis: Vec::new(),
        }
    }

    /// Length of the description in characters, ignoring surrounding whitespace.
    pub fn description_len(&self) -> usize {
        self.description
            .as_deref()
            .map(|d| d.trim().chars().count())
            .unwrap_or(0)
    }

    /// Whether the description meets the given minimum length.
    pub fn has_description(&self, min_len: usize) -> bool {
        let len = self.description_len();
        len > 0 && len >= min_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn deserializes_minimal_program() {
        let json = r#"{ "id": 7, "name": "Payments" }"#;
        let program: Program = serde_json::from_str(json).unwrap();

        assert_eq!(program, Program::new(7, "Payments"));
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = indoc! {r#"
            {
                "id": 1,
                "name": "Checkout v2",
                "description": "Replace the legacy checkout flow",
                "status": "active",
                "ownerId": 42,
                "startDate": "2026-01-05T00:00:00Z",
                "endDate": "2026-12-18T00:00:00Z",
                "objectives": ["Cut latency"],
                "kpis": ["p95 < 300ms"]
            }
        "#};
        let program: Program = serde_json::from_str(json).unwrap();

        assert_eq!(program.owner_id, Some(42));
        assert_eq!(program.status, ProgramStatus::Active);
        assert!(program.start_date.is_some());
        assert_eq!(program.objectives, vec!["Cut latency".to_string()]);
    }

    #[test]
    fn description_length_ignores_whitespace() {
        let mut program = Program::new(1, "p");
        program.description = Some("   short    ".into());

        assert_eq!(program.description_len(), 5);
        assert!(program.has_description(5));
        assert!(!program.has_description(10));
    }

    #[test]
    fn blank_description_is_missing_even_with_zero_threshold() {
        let mut program = Program::new(1, "p");
        program.description = Some("   ".into());

        assert!(!program.has_description(0));
    }
}
