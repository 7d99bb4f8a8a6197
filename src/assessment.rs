//! End-to-end program assessment.
//!
//! Runs the completeness analysis, feeds its missing count into the health
//! calculator and attaches the risk and adoption summaries. Portfolio
//! assessment does the same for every program in parallel and ranks
//! recommendations across the whole set.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, info_span};

use crate::adoption::{summarize_adoption, AdoptionSummary};
use crate::completeness::{CompletenessAnalyzer, CompletenessResult};
use crate::config::ProgramHealthConfig;
use crate::health::{HealthCalculator, HealthMetrics, HealthStatus};
use crate::model::{EntityId, ProgramStatus};
use crate::recommendations::{Recommendation, RecommendationEngine};
use crate::risk::{summarize_risks, RiskSummary};
use crate::snapshot::ProgramSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramAssessment {
    pub program_id: EntityId,
    pub program_name: String,
    pub program_status: ProgramStatus,
    pub completeness: CompletenessResult,
    pub health: HealthMetrics,
    pub risks: RiskSummary,
    pub adoption: AdoptionSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub generated_at: DateTime<Utc>,
    pub programs: Vec<ProgramAssessment>,
    /// Rounded mean health score; absent for an empty portfolio
    pub average_health: Option<u8>,
    pub status_counts: BTreeMap<HealthStatus, usize>,
    pub recommendations: Vec<Recommendation>,
}

/// The three engines wired with one configuration.
#[derive(Debug, Clone, Default)]
pub struct Assessor {
    health: HealthCalculator,
    completeness: CompletenessAnalyzer,
    recommendations: RecommendationEngine,
}

impl Assessor {
    pub fn from_config(config: &ProgramHealthConfig) -> Self {
        Self {
            health: HealthCalculator::new(config.health()),
            completeness: CompletenessAnalyzer::new(config.completeness()),
            recommendations: RecommendationEngine::new(
                config.recommendations(),
                config.completeness(),
            ),
        }
    }

    pub fn assess_program(&self, snapshot: &ProgramSnapshot, as_of: DateTime<Utc>) -> ProgramAssessment {
        let completeness = self.completeness.analyze(&snapshot.program, &snapshot.counts());
        let health = self
            .health
            .calculate(&snapshot.health_snapshot(completeness.missing_count(), as_of));

        debug!(
            program_id = snapshot.program.id,
            score = health.score.value(),
            missing = completeness.missing_count(),
            "Assessed program"
        );

        ProgramAssessment {
            program_id: snapshot.program.id,
            program_name: snapshot.program.name.clone(),
            program_status: snapshot.program.status,
            completeness,
            health,
            risks: summarize_risks(&snapshot.risks),
            adoption: summarize_adoption(&snapshot.adopters),
        }
    }

    /// Ranked recommendations for the portfolio, independent of scoring.
    pub fn recommend(
        &self,
        snapshots: &[ProgramSnapshot],
        as_of: DateTime<Utc>,
        limit: Option<usize>,
    ) -> Vec<Recommendation> {
        self.recommendations.generate(snapshots, as_of, limit)
    }

    pub fn assess_portfolio(
        &self,
        snapshots: &[ProgramSnapshot],
        as_of: DateTime<Utc>,
        limit: Option<usize>,
    ) -> PortfolioReport {
        let span = info_span!("assess_portfolio", programs = snapshots.len());
        let _enter = span.enter();

        let programs: Vec<ProgramAssessment> = snapshots
            .par_iter()
            .map(|snapshot| self.assess_program(snapshot, as_of))
            .collect();

        let mut status_counts = BTreeMap::new();
        for assessment in &programs {
            *status_counts.entry(assessment.health.status).or_insert(0) += 1;
        }

        let average_health = if programs.is_empty() {
            None
        } else {
            let sum: usize = programs
                .iter()
                .map(|p| usize::from(p.health.score.value()))
                .sum();
            Some(((2 * sum + programs.len()) / (2 * programs.len())) as u8)
        };

        let recommendations = self.recommend(snapshots, as_of, limit);

        info!(
            programs = programs.len(),
            recommendations = recommendations.len(),
            "Portfolio assessment complete"
        );

        PortfolioReport {
            generated_at: as_of,
            programs,
            average_health,
            status_counts,
            recommendations,
        }
    }
}

/// Assess one program.
pub fn assess_program(
    snapshot: &ProgramSnapshot,
    as_of: DateTime<Utc>,
    config: &ProgramHealthConfig,
) -> ProgramAssessment {
    Assessor::from_config(config).assess_program(snapshot, as_of)
}

/// Assess every program and rank recommendations across the portfolio.
pub fn assess_portfolio(
    snapshots: &[ProgramSnapshot],
    as_of: DateTime<Utc>,
    config: &ProgramHealthConfig,
    limit: Option<usize>,
) -> PortfolioReport {
    Assessor::from_config(config).assess_portfolio(snapshots, as_of, limit)
}
