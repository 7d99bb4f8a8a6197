use serde::{Deserialize, Serialize};

/// Penalty weights and status thresholds for the health score.
///
/// Every penalty is subtracted once per offending item from a base score of
/// 100. The defaults are the weights the dashboard has always shipped with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Points removed per high or critical severity risk
    #[serde(default = "default_critical_risk_penalty")]
    pub critical_risk_penalty: u32,

    /// Points removed per overdue milestone
    #[serde(default = "default_overdue_milestone_penalty")]
    pub overdue_milestone_penalty: u32,

    /// Points removed per blocked dependency
    #[serde(default = "default_blocked_dependency_penalty")]
    pub blocked_dependency_penalty: u32,

    /// Points removed per missing required component
    #[serde(default = "default_missing_component_penalty")]
    pub missing_component_penalty: u32,

    /// Points removed per blocked adopter (disabled by default)
    #[serde(default)]
    pub blocked_adopter_penalty: u32,

    /// Minimum score labelled "Healthy"
    #[serde(default = "default_healthy_threshold")]
    pub healthy_threshold: u8,

    /// Minimum score labelled "Needs Attention"; anything lower is "At Risk"
    #[serde(default = "default_attention_threshold")]
    pub attention_threshold: u8,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            critical_risk_penalty: default_critical_risk_penalty(),
            overdue_milestone_penalty: default_overdue_milestone_penalty(),
            blocked_dependency_penalty: default_blocked_dependency_penalty(),
            missing_component_penalty: default_missing_component_penalty(),
            blocked_adopter_penalty: 0,
            healthy_threshold: default_healthy_threshold(),
            attention_threshold: default_attention_threshold(),
        }
    }
}

impl HealthConfig {
    /// Thresholds must satisfy `0 < attention < healthy <= 100`.
    pub fn validate(&self) -> Result<(), String> {
        if self.healthy_threshold > 100 {
            return Err(format!(
                "healthy_threshold must be at most 100, got {}",
                self.healthy_threshold
            ));
        }
        if self.attention_threshold == 0 {
            return Err("attention_threshold must be greater than 0".to_string());
        }
        if self.attention_threshold >= self.healthy_threshold {
            return Err(format!(
                "attention_threshold ({}) must be below healthy_threshold ({})",
                self.attention_threshold, self.healthy_threshold
            ));
        }
        for (name, penalty) in self.penalties() {
            if penalty > 100 {
                return Err(format!("{name} must be at most 100, got {penalty}"));
            }
        }
        Ok(())
    }

    fn penalties(&self) -> [(&'static str, u32); 5] {
        [
            ("critical_risk_penalty", self.critical_risk_penalty),
            ("overdue_milestone_penalty", self.overdue_milestone_penalty),
            ("blocked_dependency_penalty", self.blocked_dependency_penalty),
            ("missing_component_penalty", self.missing_component_penalty),
            ("blocked_adopter_penalty", self.blocked_adopter_penalty),
        ]
    }
}

fn default_critical_risk_penalty() -> u32 {
    15
}
fn default_overdue_milestone_penalty() -> u32 {
    10
}
fn default_blocked_dependency_penalty() -> u32 {
    10
}
fn default_missing_component_penalty() -> u32 {
    5
}
fn default_healthy_threshold() -> u8 {
    80
}
fn default_attention_threshold() -> u8 {
    60
}
