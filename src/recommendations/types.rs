use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::EntityId;

/// Recommendation urgency. Ordering follows urgency: `Critical` is greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Ranking weight: critical 4, high 3, medium 2, low 1.
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five PMI process groups, in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProcessGroup {
    Initiating,
    Planning,
    Executing,
    #[serde(rename = "Monitoring & Controlling")]
    MonitoringAndControlling,
    Closing,
}

impl ProcessGroup {
    pub const ALL: [ProcessGroup; 5] = [
        ProcessGroup::Initiating,
        ProcessGroup::Planning,
        ProcessGroup::Executing,
        ProcessGroup::MonitoringAndControlling,
        ProcessGroup::Closing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProcessGroup::Initiating => "Initiating",
            ProcessGroup::Planning => "Planning",
            ProcessGroup::Executing => "Executing",
            ProcessGroup::MonitoringAndControlling => "Monitoring & Controlling",
            ProcessGroup::Closing => "Closing",
        }
    }
}

impl fmt::Display for ProcessGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: ProcessGroup,
    pub title: String,
    pub description: String,
    pub pmi_reference: String,
    pub priority: Priority,
    /// Program the recommendation is about; absent for portfolio-wide advice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<EntityId>,
}
