use serde::{Deserialize, Serialize};

/// Rules for the completeness analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessConfig {
    /// Minimum trimmed description length for the description to count as
    /// present. Recommendations use the same threshold.
    #[serde(default = "default_min_description_length")]
    pub min_description_length: usize,
}

impl Default for CompletenessConfig {
    fn default() -> Self {
        Self {
            min_description_length: default_min_description_length(),
        }
    }
}

/// Portfolio rule thresholds and presentation limits for recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Recommendations shown in the dashboard modal
    #[serde(default = "default_dashboard_limit")]
    pub dashboard_limit: usize,

    /// Recommendations shown as daily priorities
    #[serde(default = "default_daily_limit")]
    pub daily_limit: usize,

    /// Portfolios with more programs than this get a PMO governance recommendation
    #[serde(default = "default_pmo_program_threshold")]
    pub pmo_program_threshold: usize,

    /// Portfolios averaging fewer risks per program than this get a
    /// portfolio risk assessment recommendation
    #[serde(default = "default_min_average_risks")]
    pub min_average_risks_per_program: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            dashboard_limit: default_dashboard_limit(),
            daily_limit: default_daily_limit(),
            pmo_program_threshold: default_pmo_program_threshold(),
            min_average_risks_per_program: default_min_average_risks(),
        }
    }
}

impl RecommendationConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.min_average_risks_per_program.is_finite()
            || self.min_average_risks_per_program < 0.0
        {
            return Err(format!(
                "min_average_risks_per_program must be a non-negative number, got {}",
                self.min_average_risks_per_program
            ));
        }
        Ok(())
    }
}

fn default_min_description_length() -> usize {
    10
}
fn default_dashboard_limit() -> usize {
    15
}
fn default_daily_limit() -> usize {
    8
}
fn default_pmo_program_threshold() -> usize {
    2
}
fn default_min_average_risks() -> f64 {
    2.0
}
