//! Risk register analytics for the risk-management view.
//!
//! Exposure is the classic probability-impact product on a 5x5 matrix. Ratings
//! outside 1-5 are clamped and missing ratings count as 1, so every risk has an
//! exposure between 1 and 25.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{EntityId, Risk, RiskSeverity, RiskStatus};

pub const MAX_TOP_EXPOSURES: usize = 5;

/// Probability x impact, 1-25.
pub fn exposure(risk: &Risk) -> u8 {
    let rating = |value: Option<u8>| value.unwrap_or(1).clamp(1, 5);
    rating(risk.impact) * rating(risk.probability)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskExposure {
    pub risk_id: EntityId,
    pub title: String,
    pub severity: RiskSeverity,
    pub exposure: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummary {
    pub total: usize,
    pub open: usize,
    pub critical: usize,
    pub by_severity: BTreeMap<RiskSeverity, usize>,
    pub by_status: BTreeMap<RiskStatus, usize>,
    /// Mean exposure rounded to one decimal; 0 for an empty register
    pub average_exposure: f64,
    /// Highest exposures first, ties in register order
    pub top_exposures: Vec<RiskExposure>,
}

pub fn summarize_risks(risks: &[Risk]) -> RiskSummary {
    let mut by_severity = BTreeMap::new();
    let mut by_status = BTreeMap::new();
    for risk in risks {
        *by_severity.entry(risk.severity).or_insert(0) += 1;
        *by_status.entry(risk.status).or_insert(0) += 1;
    }

    let average_exposure = if risks.is_empty() {
        0.0
    } else {
        let sum: u32 = risks.iter().map(|r| u32::from(exposure(r))).sum();
        (f64::from(sum) / risks.len() as f64 * 10.0).round() / 10.0
    };

    let mut top_exposures: Vec<RiskExposure> = risks
        .iter()
        .map(|r| RiskExposure {
            risk_id: r.id,
            title: r.title.clone(),
            severity: r.severity,
            exposure: exposure(r),
        })
        .collect();
    top_exposures.sort_by(|a, b| b.exposure.cmp(&a.exposure));
    top_exposures.truncate(MAX_TOP_EXPOSURES);

    RiskSummary {
        total: risks.len(),
        open: risks.iter().filter(|r| r.is_open()).count(),
        critical: risks.iter().filter(|r| r.is_critical()).count(),
        by_severity,
        by_status,
        average_exposure,
        top_exposures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::risk;
    use pretty_assertions::assert_eq;

    fn rated(id: EntityId, impact: Option<u8>, probability: Option<u8>) -> Risk {
        Risk {
            impact,
            probability,
            ..risk(id, RiskSeverity::Medium)
        }
    }

    #[test]
    fn exposure_multiplies_clamped_ratings() {
        assert_eq!(exposure(&rated(1, Some(4), Some(5))), 20);
        assert_eq!(exposure(&rated(1, Some(9), Some(0))), 5);
        assert_eq!(exposure(&rated(1, None, Some(3))), 3);
        assert_eq!(exposure(&rated(1, None, None)), 1);
    }

    #[test]
    fn empty_register_summary() {
        let summary = summarize_risks(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_exposure, 0.0);
        assert!(summary.top_exposures.is_empty());
    }

    #[test]
    fn summary_counts_and_ranks_exposures() {
        let mut risks = vec![
            rated(1, Some(2), Some(2)),
            rated(2, Some(5), Some(5)),
            rated(3, Some(1), Some(3)),
            rated(4, Some(2), Some(2)),
        ];
        risks[1].severity = RiskSeverity::Critical;
        risks[2].status = RiskStatus::Mitigated;

        let summary = summarize_risks(&risks);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.open, 3);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.by_severity[&RiskSeverity::Medium], 3);
        assert_eq!(summary.by_status[&RiskStatus::Mitigated], 1);
        assert_eq!(summary.average_exposure, 9.0);
        let order: Vec<EntityId> = summary.top_exposures.iter().map(|e| e.risk_id).collect();
        assert_eq!(order, vec![2, 1, 4, 3]);
    }

    #[test]
    fn top_exposures_are_capped() {
        let risks: Vec<Risk> = (0..8).map(|i| rated(i, Some(3), Some(3))).collect();
        assert_eq!(summarize_risks(&risks).top_exposures.len(), MAX_TOP_EXPOSURES);
    }
}
