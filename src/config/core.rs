use serde::{Deserialize, Serialize};

use super::health::HealthConfig;
use super::thresholds::{CompletenessConfig, RecommendationConfig};
use crate::integrations::Channel;

/// Root configuration structure, read from `.program-health.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProgramHealthConfig {
    /// Health score penalties and thresholds
    #[serde(default)]
    pub health: Option<HealthConfig>,

    /// Completeness rules
    #[serde(default)]
    pub completeness: Option<CompletenessConfig>,

    /// Recommendation rules and limits
    #[serde(default)]
    pub recommendations: Option<RecommendationConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Notification channels
    #[serde(default)]
    pub integrations: Option<IntegrationsConfig>,
}

impl ProgramHealthConfig {
    pub fn health(&self) -> HealthConfig {
        self.health.clone().unwrap_or_default()
    }

    pub fn completeness(&self) -> CompletenessConfig {
        self.completeness.clone().unwrap_or_default()
    }

    pub fn recommendations(&self) -> RecommendationConfig {
        self.recommendations.clone().unwrap_or_default()
    }

    /// Channels alerts are dispatched to. Empty when no integrations are configured.
    pub fn enabled_channels(&self) -> Vec<Channel> {
        self.integrations
            .as_ref()
            .map(|i| i.enabled.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntegrationsConfig {
    #[serde(default)]
    pub enabled: Vec<Channel>,
}
