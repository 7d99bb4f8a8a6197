//! Grouping flat entity collections into per-program snapshots.
//!
//! The storage layer hands back one list per entity type. Everything
//! downstream works on a [`ProgramSnapshot`]: a program together with the
//! entities that reference it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::completeness::RelatedEntityCounts;
use crate::health::HealthSnapshot;
use crate::model::{
    Adopter, Bepic, Dependency, EntityId, Epic, HierarchyCounts, Milestone, Program, Risk, Step,
    Story,
};

/// Flat entity lists as returned by the REST layer.
///
/// Hierarchy lists are optional; when all four are absent the hierarchy
/// checks are skipped for every program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioInput {
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub adopters: Vec<Adopter>,
    #[serde(default)]
    pub steps: Option<Vec<Step>>,
    #[serde(default)]
    pub bepics: Option<Vec<Bepic>>,
    #[serde(default)]
    pub epics: Option<Vec<Epic>>,
    #[serde(default)]
    pub stories: Option<Vec<Story>>,
}

impl PortfolioInput {
    fn has_hierarchy(&self) -> bool {
        self.steps.is_some() || self.bepics.is_some() || self.epics.is_some() || self.stories.is_some()
    }
}

/// One program and everything that belongs to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSnapshot {
    pub program: Program,
    pub risks: Vec<Risk>,
    pub milestones: Vec<Milestone>,
    pub dependencies: Vec<Dependency>,
    pub adopters: Vec<Adopter>,
    pub hierarchy: Option<HierarchyCounts>,
}

impl ProgramSnapshot {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            risks: Vec::new(),
            milestones: Vec::new(),
            dependencies: Vec::new(),
            adopters: Vec::new(),
            hierarchy: None,
        }
    }

    pub fn counts(&self) -> RelatedEntityCounts {
        RelatedEntityCounts {
            milestones: self.milestones.len(),
            risks: self.risks.len(),
            dependencies: self.dependencies.len(),
            adopters: self.adopters.len(),
            hierarchy: self.hierarchy,
        }
    }

    /// Borrow this snapshot as health calculator input.
    pub fn health_snapshot(
        &self,
        missing_components: usize,
        as_of: DateTime<Utc>,
    ) -> HealthSnapshot<'_> {
        HealthSnapshot {
            risks: &self.risks,
            milestones: &self.milestones,
            dependencies: &self.dependencies,
            adopters: Some(&self.adopters),
            missing_components,
            as_of,
        }
    }
}

/// Group flat collections by `programId`, keeping program order.
///
/// Entities that reference an unknown program are dropped.
pub fn group_snapshots(input: PortfolioInput) -> Vec<ProgramSnapshot> {
    let with_hierarchy = input.has_hierarchy();
    let mut snapshots: Vec<ProgramSnapshot> = Vec::with_capacity(input.programs.len());
    let mut index: HashMap<EntityId, usize> = HashMap::with_capacity(input.programs.len());

    for program in input.programs {
        if index.contains_key(&program.id) {
            debug!(program_id = program.id, "Skipping duplicate program");
            continue;
        }
        index.insert(program.id, snapshots.len());
        let mut snapshot = ProgramSnapshot::new(program);
        if with_hierarchy {
            snapshot.hierarchy = Some(HierarchyCounts::default());
        }
        snapshots.push(snapshot);
    }

    let mut orphans = 0usize;
    let mut slot = |program_id: EntityId| -> Option<usize> {
        let found = index.get(&program_id).copied();
        if found.is_none() {
            orphans += 1;
        }
        found
    };

    for risk in input.risks {
        if let Some(i) = slot(risk.program_id) {
            snapshots[i].risks.push(risk);
        }
    }
    for milestone in input.milestones {
        if let Some(i) = slot(milestone.program_id) {
            snapshots[i].milestones.push(milestone);
        }
    }
    for dependency in input.dependencies {
        if let Some(i) = slot(dependency.program_id) {
            snapshots[i].dependencies.push(dependency);
        }
    }
    for adopter in input.adopters {
        if let Some(i) = slot(adopter.program_id) {
            snapshots[i].adopters.push(adopter);
        }
    }

    let hierarchy_ids = [
        (0, ids(input.steps.as_deref(), |s: &Step| s.program_id)),
        (1, ids(input.bepics.as_deref(), |b: &Bepic| b.program_id)),
        (2, ids(input.epics.as_deref(), |e: &Epic| e.program_id)),
        (3, ids(input.stories.as_deref(), |s: &Story| s.program_id)),
    ];
    for (level, program_ids) in hierarchy_ids {
        for program_id in program_ids {
            let Some(i) = slot(program_id) else { continue };
            if let Some(counts) = snapshots[i].hierarchy.as_mut() {
                match level {
                    0 => counts.steps += 1,
                    1 => counts.business_epics += 1,
                    2 => counts.epics += 1,
                    _ => counts.stories += 1,
                }
            }
        }
    }

    if orphans > 0 {
        debug!(orphans, "Dropped entities referencing unknown programs");
    }

    snapshots
}

fn ids<T>(items: Option<&[T]>, program_id: impl Fn(&T) -> EntityId) -> Vec<EntityId> {
    items
        .unwrap_or_default()
        .iter()
        .map(program_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DependencyStatus, RiskSeverity};
    use crate::testkit::{dependency_for, risk_for, ProgramBuilder};
    use pretty_assertions::assert_eq;

    fn input() -> PortfolioInput {
        PortfolioInput {
            programs: vec![
                ProgramBuilder::new(2, "Second").build(),
                ProgramBuilder::new(1, "First").build(),
            ],
            risks: vec![
                risk_for(10, 1, RiskSeverity::High),
                risk_for(11, 2, RiskSeverity::Low),
                risk_for(12, 99, RiskSeverity::Critical),
            ],
            dependencies: vec![dependency_for(20, 1, DependencyStatus::Blocked)],
            ..Default::default()
        }
    }

    #[test]
    fn groups_entities_by_program_in_program_order() {
        let snapshots = group_snapshots(input());

        let ids: Vec<EntityId> = snapshots.iter().map(|s| s.program.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(snapshots[0].risks.len(), 1);
        assert_eq!(snapshots[1].risks.len(), 1);
        assert_eq!(snapshots[1].dependencies.len(), 1);
    }

    #[test]
    fn drops_entities_for_unknown_programs() {
        let snapshots = group_snapshots(input());
        let total_risks: usize = snapshots.iter().map(|s| s.risks.len()).sum();
        assert_eq!(total_risks, 2);
    }

    #[test]
    fn hierarchy_is_absent_unless_any_list_is_supplied() {
        let snapshots = group_snapshots(input());
        assert!(snapshots.iter().all(|s| s.hierarchy.is_none()));

        let mut with_epics = input();
        with_epics.epics = Some(vec![Epic {
            id: 1,
            program_id: 1,
            title: "Platform".into(),
        }]);
        let snapshots = group_snapshots(with_epics);

        assert_eq!(snapshots[0].hierarchy, Some(HierarchyCounts::default()));
        assert_eq!(snapshots[1].hierarchy.map(|h| h.epics), Some(1));
    }

    #[test]
    fn duplicate_programs_keep_first_occurrence() {
        let mut dup = input();
        dup.programs.push(ProgramBuilder::new(1, "Imposter").build());

        let snapshots = group_snapshots(dup);
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[1].program.name, "First");
    }

    #[test]
    fn counts_reflect_grouped_entities() {
        let snapshots = group_snapshots(input());
        let counts = snapshots[1].counts();

        assert_eq!(counts.risks, 1);
        assert_eq!(counts.dependencies, 1);
        assert_eq!(counts.milestones, 0);
    }

    #[test]
    fn deserializes_rest_payload() {
        let json = r#"{
            "programs": [{ "id": 1, "name": "Atlas" }],
            "risks": [{ "id": 3, "programId": 1, "severity": "critical" }],
            "stories": []
        }"#;
        let input: PortfolioInput = serde_json::from_str(json).unwrap();
        let snapshots = group_snapshots(input);

        assert_eq!(snapshots[0].risks[0].severity, RiskSeverity::Critical);
        assert_eq!(snapshots[0].hierarchy, Some(HierarchyCounts::default()));
    }
}
