use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::model::{
    Adopter, AdopterStatus, Dependency, DependencyStatus, EntityId, Milestone, MilestoneStatus,
    Program, ProgramStatus, Risk, RiskSeverity, RiskStatus,
};
use crate::snapshot::ProgramSnapshot;

/// The instant every fixture is evaluated against.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// `days` before `now`; negative values move into the future.
pub fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

/// Fluent builder for programs.
#[derive(Debug, Clone)]
pub struct ProgramBuilder {
    program: Program,
}

impl ProgramBuilder {
    /// A program with nothing but an id and a name.
    pub fn new(id: EntityId, name: &str) -> Self {
        Self {
            program: Program::new(id, name),
        }
    }

    /// A program with every program-level component filled in.
    pub fn complete(id: EntityId, name: &str) -> Self {
        let now = fixed_now();
        Self::new(id, name)
            .description("Consolidate the checkout services onto the new platform")
            .status(ProgramStatus::Active)
            .owner(100 + id)
            .dates(days_before(now, 90), days_before(now, -180))
            .objectives(&["Reduce checkout latency"])
            .kpis(&["p95 latency under 300ms"])
    }

    pub fn description(mut self, description: &str) -> Self {
        self.program.description = Some(description.to_string());
        self
    }

    pub fn status(mut self, status: ProgramStatus) -> Self {
        self.program.status = status;
        self
    }

    pub fn owner(mut self, owner_id: EntityId) -> Self {
        self.program.owner_id = Some(owner_id);
        self
    }

    pub fn dates(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.program.start_date = Some(start);
        self.program.end_date = Some(end);
        self
    }

    pub fn objectives(mut self, objectives: &[&str]) -> Self {
        self.program.objectives = objectives.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn kpis(mut self, kpis: &[&str]) -> Self {
        self.program.kpis = kpis.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Program {
        self.program
    }
}

pub fn risk(id: EntityId, severity: RiskSeverity) -> Risk {
    risk_for(id, 1, severity)
}

pub fn risk_for(id: EntityId, program_id: EntityId, severity: RiskSeverity) -> Risk {
    Risk {
        id,
        program_id,
        title: format!("Risk {id}"),
        severity,
        status: RiskStatus::Identified,
        impact: Some(3),
        probability: Some(3),
        due_date: None,
    }
}

pub fn milestone(id: EntityId, status: MilestoneStatus, due_date: Option<DateTime<Utc>>) -> Milestone {
    Milestone {
        id,
        program_id: 1,
        title: format!("Milestone {id}"),
        status,
        due_date,
    }
}

pub fn dependency(id: EntityId, status: DependencyStatus) -> Dependency {
    dependency_for(id, 1, status)
}

pub fn dependency_for(id: EntityId, program_id: EntityId, status: DependencyStatus) -> Dependency {
    Dependency {
        id,
        program_id,
        title: format!("Dependency {id}"),
        status,
    }
}

pub fn adopter(id: EntityId, status: AdopterStatus, readiness_score: u8) -> Adopter {
    Adopter {
        id,
        program_id: 1,
        team_name: format!("Team {id}"),
        status,
        readiness_score,
    }
}

/// A program with no gaps and no problems: three future milestones, two low
/// or medium risks, one on-track dependency and one adopter.
pub fn complete_snapshot(id: EntityId, name: &str) -> ProgramSnapshot {
    let now = fixed_now();
    let mut snapshot = ProgramSnapshot::new(ProgramBuilder::complete(id, name).build());
    snapshot.milestones = (1..=3)
        .map(|i| milestone(i, MilestoneStatus::NotStarted, Some(days_before(now, -30 * i))))
        .collect();
    for milestone in &mut snapshot.milestones {
        milestone.program_id = id;
    }
    snapshot.risks = vec![
        risk_for(1, id, RiskSeverity::Low),
        risk_for(2, id, RiskSeverity::Medium),
    ];
    snapshot.dependencies = vec![dependency_for(1, id, DependencyStatus::OnTrack)];
    snapshot.adopters = vec![Adopter {
        program_id: id,
        ..adopter(1, AdopterStatus::InProgress, 60)
    }];
    snapshot
}
