use serde::{Deserialize, Serialize};

use super::RequiredComponent;
use crate::config::CompletenessConfig;
use crate::model::{HierarchyCounts, Program};

/// Number of related entities a program has.
///
/// `hierarchy` is `None` when the JIRA-mirroring entities are not in scope,
/// which removes the hierarchy checks entirely rather than failing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntityCounts {
    pub milestones: usize,
    pub risks: usize,
    pub dependencies: usize,
    pub adopters: usize,
    #[serde(default)]
    pub hierarchy: Option<HierarchyCounts>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessResult {
    /// `round(100 * completed / total)`
    pub percentage: u8,
    pub completed: usize,
    pub total: usize,
    /// Absent components in check order
    pub missing: Vec<RequiredComponent>,
}

impl CompletenessResult {
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_names(&self) -> Vec<&'static str> {
        self.missing.iter().map(RequiredComponent::name).collect()
    }
}

/// Checks a program against the canonical rule set.
#[derive(Debug, Clone, Default)]
pub struct CompletenessAnalyzer {
    config: CompletenessConfig,
}

impl CompletenessAnalyzer {
    pub fn new(config: CompletenessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompletenessConfig {
        &self.config
    }

    pub fn analyze(&self, program: &Program, counts: &RelatedEntityCounts) -> CompletenessResult {
        let hierarchy_checks: &[RequiredComponent] = if counts.hierarchy.is_some() {
            &RequiredComponent::HIERARCHY
        } else {
            &[]
        };

        let checks: Vec<(RequiredComponent, bool)> = RequiredComponent::CORE
            .iter()
            .chain(hierarchy_checks)
            .map(|&component| (component, self.is_present(component, program, counts)))
            .collect();

        let total = checks.len();
        let missing: Vec<RequiredComponent> = checks
            .iter()
            .filter(|(_, present)| !present)
            .map(|(component, _)| *component)
            .collect();
        let completed = total - missing.len();

        CompletenessResult {
            percentage: rounded_percentage(completed, total),
            completed,
            total,
            missing,
        }
    }

    fn is_present(
        &self,
        component: RequiredComponent,
        program: &Program,
        counts: &RelatedEntityCounts,
    ) -> bool {
        let hierarchy = counts.hierarchy.unwrap_or_default();
        match component {
            RequiredComponent::Description => {
                program.has_description(self.config.min_description_length)
            }
            RequiredComponent::Owner => program.owner_id.is_some(),
            RequiredComponent::StartDate => program.start_date.is_some(),
            RequiredComponent::EndDate => program.end_date.is_some(),
            RequiredComponent::Objectives => !program.objectives.is_empty(),
            RequiredComponent::Kpis => !program.kpis.is_empty(),
            RequiredComponent::Milestones => counts.milestones > 0,
            RequiredComponent::Risks => counts.risks > 0,
            RequiredComponent::Dependencies => counts.dependencies > 0,
            RequiredComponent::Adopters => counts.adopters > 0,
            RequiredComponent::BusinessEpics => hierarchy.business_epics > 0,
            RequiredComponent::Epics => hierarchy.epics > 0,
            RequiredComponent::Stories => hierarchy.stories > 0,
        }
    }
}

/// Analyze with the default rule set.
pub fn analyze_completeness(program: &Program, counts: &RelatedEntityCounts) -> CompletenessResult {
    CompletenessAnalyzer::default().analyze(program, counts)
}

/// Integer percentage rounded half up. Zero checks count as complete.
pub(crate) fn rounded_percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let part = part.min(total) as u64;
    let total = total as u64;
    ((200 * part + total) / (2 * total)) as u8
}
