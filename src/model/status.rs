use serde::{Deserialize, Serialize};

/// Lifecycle state of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramStatus {
    Planning,
    Active,
    OnHold,
    Completed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ProgramStatus {
    /// Completed and cancelled programs have entered the closing phase.
    pub fn is_closed(&self) -> bool {
        matches!(self, ProgramStatus::Completed | ProgramStatus::Cancelled)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgramStatus::Planning => "planning",
            ProgramStatus::Active => "active",
            ProgramStatus::OnHold => "on hold",
            ProgramStatus::Completed => "completed",
            ProgramStatus::Cancelled => "cancelled",
            ProgramStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
    Critical,
    /// Unrecognized severities rank below `Low`.
    #[default]
    #[serde(other)]
    Unknown,
}

impl PartialOrd for RiskSeverity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskSeverity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl RiskSeverity {
    pub fn rank(&self) -> u8 {
        match self {
            RiskSeverity::Unknown => 0,
            RiskSeverity::Low => 1,
            RiskSeverity::Medium => 2,
            RiskSeverity::High => 3,
            RiskSeverity::Critical => 4,
        }
    }

    /// `High` and `Critical` risks count against program health.
    pub fn is_critical(&self) -> bool {
        matches!(self, RiskSeverity::High | RiskSeverity::Critical)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskSeverity::Low => "low",
            RiskSeverity::Medium => "medium",
            RiskSeverity::High => "high",
            RiskSeverity::Critical => "critical",
            RiskSeverity::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    Identified,
    InProgress,
    Mitigated,
    Resolved,
    Accepted,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskStatus {
    /// A risk stays open until it is mitigated, resolved or accepted.
    /// Unknown states are treated as open.
    pub fn is_open(&self) -> bool {
        !matches!(
            self,
            RiskStatus::Mitigated | RiskStatus::Resolved | RiskStatus::Accepted
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskStatus::Identified => "identified",
            RiskStatus::InProgress => "in_progress",
            RiskStatus::Mitigated => "mitigated",
            RiskStatus::Resolved => "resolved",
            RiskStatus::Accepted => "accepted",
            RiskStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    NotStarted,
    InProgress,
    AtRisk,
    Completed,
    Delayed,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyStatus {
    Blocked,
    AtRisk,
    OnTrack,
    Completed,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdopterStatus {
    NotStarted,
    InProgress,
    Ready,
    Blocked,
    Completed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AdopterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AdopterStatus::NotStarted => "not_started",
            AdopterStatus::InProgress => "in_progress",
            AdopterStatus::Ready => "ready",
            AdopterStatus::Blocked => "blocked",
            AdopterStatus::Completed => "completed",
            AdopterStatus::Unknown => "unknown",
        }
    }
}
