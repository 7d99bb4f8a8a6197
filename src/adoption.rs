//! Adopter onboarding readiness.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::completeness::rounded_percentage;
use crate::model::{Adopter, AdopterStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionSummary {
    pub total: usize,
    pub by_status: BTreeMap<AdopterStatus, usize>,
    pub blocked: usize,
    /// Mean readiness score, rounded; 0 when there are no adopters
    pub average_readiness: u8,
    /// Share of adopters that are ready or completed
    pub ready_percentage: u8,
}

pub fn summarize_adoption(adopters: &[Adopter]) -> AdoptionSummary {
    let mut by_status = BTreeMap::new();
    for adopter in adopters {
        *by_status.entry(adopter.status).or_insert(0) += 1;
    }

    let total = adopters.len();
    let readiness_sum: usize = adopters.iter().map(|a| usize::from(a.readiness_score)).sum();
    let ready = adopters.iter().filter(|a| a.is_ready()).count();

    AdoptionSummary {
        total,
        by_status,
        blocked: adopters.iter().filter(|a| a.is_blocked()).count(),
        average_readiness: if total == 0 {
            0
        } else {
            ((2 * readiness_sum + total) / (2 * total)) as u8
        },
        ready_percentage: if total == 0 {
            0
        } else {
            rounded_percentage(ready, total)
        },
    }
}
