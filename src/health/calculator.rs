use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::score::{HealthColor, HealthScore, HealthStatus};
use crate::config::HealthConfig;
use crate::model::{Adopter, Dependency, Milestone, Risk};

/// Inputs for one health calculation.
///
/// `as_of` is the instant milestones are judged overdue against; passing it
/// explicitly keeps the calculation reproducible.
#[derive(Debug, Clone, Copy)]
pub struct HealthSnapshot<'a> {
    pub risks: &'a [Risk],
    pub milestones: &'a [Milestone],
    pub dependencies: &'a [Dependency],
    pub adopters: Option<&'a [Adopter]>,
    pub missing_components: usize,
    pub as_of: DateTime<Utc>,
}

impl<'a> HealthSnapshot<'a> {
    pub fn empty(as_of: DateTime<Utc>) -> Self {
        Self {
            risks: &[],
            milestones: &[],
            dependencies: &[],
            adopters: None,
            missing_components: 0,
            as_of,
        }
    }
}

/// Raw problem counts behind a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBreakdown {
    pub critical_risks: usize,
    pub overdue_milestones: usize,
    pub blocked_dependencies: usize,
    pub missing_components: usize,
    #[serde(default)]
    pub blocked_adopters: usize,
}

impl HealthBreakdown {
    pub fn from_snapshot(snapshot: &HealthSnapshot<'_>) -> Self {
        Self {
            critical_risks: snapshot.risks.iter().filter(|r| r.is_critical()).count(),
            overdue_milestones: snapshot
                .milestones
                .iter()
                .filter(|m| m.is_overdue(snapshot.as_of))
                .count(),
            blocked_dependencies: snapshot
                .dependencies
                .iter()
                .filter(|d| d.is_blocked())
                .count(),
            missing_components: snapshot.missing_components,
            blocked_adopters: snapshot
                .adopters
                .unwrap_or_default()
                .iter()
                .filter(|a| a.is_blocked())
                .count(),
        }
    }

    /// Total points to subtract. Saturates instead of overflowing.
    pub fn penalty(&self, config: &HealthConfig) -> u64 {
        [
            (self.critical_risks, config.critical_risk_penalty),
            (self.overdue_milestones, config.overdue_milestone_penalty),
            (self.blocked_dependencies, config.blocked_dependency_penalty),
            (self.missing_components, config.missing_component_penalty),
            (self.blocked_adopters, config.blocked_adopter_penalty),
        ]
        .iter()
        .fold(0u64, |total, &(count, weight)| {
            total.saturating_add((count as u64).saturating_mul(u64::from(weight)))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub score: HealthScore,
    pub status: HealthStatus,
    pub color: HealthColor,
    pub breakdown: HealthBreakdown,
}

/// Scores program health from a snapshot of its related entities.
#[derive(Debug, Clone, Default)]
pub struct HealthCalculator {
    config: HealthConfig,
}

impl HealthCalculator {
    pub fn new(config: HealthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HealthConfig {
        &self.config
    }

    pub fn calculate(&self, snapshot: &HealthSnapshot<'_>) -> HealthMetrics {
        self.score_breakdown(HealthBreakdown::from_snapshot(snapshot))
    }

    /// Score precomputed counts.
    pub fn score_breakdown(&self, breakdown: HealthBreakdown) -> HealthMetrics {
        let score = HealthScore::from_penalty(breakdown.penalty(&self.config));
        let status = HealthStatus::classify(score, &self.config);

        HealthMetrics {
            score,
            status,
            color: status.color(),
            breakdown,
        }
    }
}

/// Calculate health with the default weights and thresholds.
pub fn calculate_health(snapshot: &HealthSnapshot<'_>) -> HealthMetrics {
    HealthCalculator::default().calculate(snapshot)
}
