//! Bounded health score and its status classification.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::config::HealthConfig;

/// Health score on a 0-100 integer scale.
///
/// Values are clamped on construction, so a `HealthScore` is always in range
/// regardless of how large the accumulated penalty was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HealthScore(u8);

impl<'de> Deserialize<'de> for HealthScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(HealthScore::new)
    }
}

impl HealthScore {
    pub const MAX: HealthScore = HealthScore(100);

    /// Create a score, clamping to [0, 100].
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Score left after subtracting `penalty` from the maximum.
    pub fn from_penalty(penalty: u64) -> Self {
        Self(100u64.saturating_sub(penalty) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HealthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status label shown next to a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    #[serde(rename = "Healthy")]
    Healthy,
}

impl HealthStatus {
    pub fn classify(score: HealthScore, config: &HealthConfig) -> Self {
        let value = score.value();
        if value >= config.healthy_threshold {
            HealthStatus::Healthy
        } else if value >= config.attention_threshold {
            HealthStatus::NeedsAttention
        } else {
            HealthStatus::AtRisk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::NeedsAttention => "Needs Attention",
            HealthStatus::AtRisk => "At Risk",
        }
    }

    pub fn color(&self) -> HealthColor {
        match self {
            HealthStatus::Healthy => HealthColor::Green,
            HealthStatus::NeedsAttention => HealthColor::Yellow,
            HealthStatus::AtRisk => HealthColor::Red,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation hint for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthColor {
    Green,
    Yellow,
    Red,
}
