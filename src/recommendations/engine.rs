use chrono::{DateTime, Utc};

use super::rules::{portfolio_recommendations, ProgramSignals, PROGRAM_RULES};
use super::types::Recommendation;
use crate::config::{CompletenessConfig, RecommendationConfig};
use crate::snapshot::ProgramSnapshot;

/// Produces ranked best-practice recommendations for a set of programs.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
    completeness: CompletenessConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig, completeness: CompletenessConfig) -> Self {
        Self {
            config,
            completeness,
        }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// All recommendations in emission order: every program's rules in
    /// program order, then portfolio rules.
    pub fn emit(&self, snapshots: &[ProgramSnapshot], as_of: DateTime<Utc>) -> Vec<Recommendation> {
        let mut emitted: Vec<Recommendation> = snapshots
            .iter()
            .flat_map(|snapshot| {
                let signals = ProgramSignals::collect(
                    snapshot,
                    self.completeness.min_description_length,
                    as_of,
                );
                PROGRAM_RULES
                    .iter()
                    .filter_map(move |rule| rule.evaluate(&signals))
            })
            .collect();

        emitted.extend(portfolio_recommendations(snapshots, &self.config));
        emitted
    }

    /// Ranked recommendations, truncated to `limit` when given.
    pub fn generate(
        &self,
        snapshots: &[ProgramSnapshot],
        as_of: DateTime<Utc>,
        limit: Option<usize>,
    ) -> Vec<Recommendation> {
        rank(self.emit(snapshots, as_of), limit)
    }
}

/// Stable sort by priority, most urgent first, then truncate.
pub fn rank(mut recommendations: Vec<Recommendation>, limit: Option<usize>) -> Vec<Recommendation> {
    recommendations.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()));
    if let Some(limit) = limit {
        recommendations.truncate(limit);
    }
    recommendations
}

/// Generate recommendations with default rules.
pub fn generate_recommendations(
    snapshots: &[ProgramSnapshot],
    as_of: DateTime<Utc>,
    limit: Option<usize>,
) -> Vec<Recommendation> {
    RecommendationEngine::default().generate(snapshots, as_of, limit)
}
