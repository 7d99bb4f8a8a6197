//! Proptest generators for programs and snapshots.

use proptest::prelude::*;

use super::fixtures::{days_before, fixed_now};
use crate::model::{
    Adopter, AdopterStatus, Dependency, DependencyStatus, Milestone, MilestoneStatus, Program,
    ProgramStatus, Risk, RiskSeverity, RiskStatus,
};
use crate::snapshot::ProgramSnapshot;

fn arb_program_status() -> impl Strategy<Value = ProgramStatus> {
    prop_oneof![
        Just(ProgramStatus::Planning),
        Just(ProgramStatus::Active),
        Just(ProgramStatus::OnHold),
        Just(ProgramStatus::Completed),
        Just(ProgramStatus::Cancelled),
        Just(ProgramStatus::Unknown),
    ]
}

pub fn arb_program() -> impl Strategy<Value = Program> {
    (
        1..1000i64,
        prop::option::of("[a-z ]{0,60}"),
        arb_program_status(),
        prop::option::of(1..500i64),
        any::<bool>(),
        any::<bool>(),
        prop::collection::vec("[a-z]{3,12}", 0..3),
        prop::collection::vec("[a-z]{3,12}", 0..3),
    )
        .prop_map(
            |(id, description, status, owner_id, has_start, has_end, objectives, kpis)| {
                let now = fixed_now();
                Program {
                    id,
                    name: format!("Program {id}"),
                    description,
                    status,
                    owner_id,
                    start_date: has_start.then(|| days_before(now, 60)),
                    end_date: has_end.then(|| days_before(now, -60)),
                    objectives,
                    kpis,
                }
            },
        )
}

fn arb_risk() -> impl Strategy<Value = Risk> {
    (
        prop_oneof![
            Just(RiskSeverity::Low),
            Just(RiskSeverity::Medium),
            Just(RiskSeverity::High),
            Just(RiskSeverity::Critical),
            Just(RiskSeverity::Unknown),
        ],
        prop_oneof![
            Just(RiskStatus::Identified),
            Just(RiskStatus::InProgress),
            Just(RiskStatus::Mitigated),
            Just(RiskStatus::Resolved),
            Just(RiskStatus::Accepted),
        ],
        prop::option::of(0..8u8),
        prop::option::of(0..8u8),
    )
        .prop_map(|(severity, status, impact, probability)| Risk {
            id: 1,
            program_id: 1,
            title: "risk".into(),
            severity,
            status,
            impact,
            probability,
            due_date: None,
        })
}

fn arb_milestone() -> impl Strategy<Value = Milestone> {
    (
        prop_oneof![
            Just(MilestoneStatus::NotStarted),
            Just(MilestoneStatus::InProgress),
            Just(MilestoneStatus::AtRisk),
            Just(MilestoneStatus::Completed),
            Just(MilestoneStatus::Delayed),
        ],
        prop::option::of(-30..30i64),
    )
        .prop_map(|(status, offset)| Milestone {
            id: 1,
            program_id: 1,
            title: "milestone".into(),
            status,
            due_date: offset.map(|days| days_before(fixed_now(), days)),
        })
}

fn arb_dependency() -> impl Strategy<Value = Dependency> {
    prop_oneof![
        Just(DependencyStatus::Blocked),
        Just(DependencyStatus::AtRisk),
        Just(DependencyStatus::OnTrack),
        Just(DependencyStatus::Completed),
    ]
    .prop_map(|status| Dependency {
        id: 1,
        program_id: 1,
        title: "dependency".into(),
        status,
    })
}

fn arb_adopter() -> impl Strategy<Value = Adopter> {
    (
        prop_oneof![
            Just(AdopterStatus::NotStarted),
            Just(AdopterStatus::InProgress),
            Just(AdopterStatus::Ready),
            Just(AdopterStatus::Blocked),
            Just(AdopterStatus::Completed),
        ],
        0..=100u8,
    )
        .prop_map(|(status, readiness_score)| Adopter {
            id: 1,
            program_id: 1,
            team_name: "team".into(),
            status,
            readiness_score,
        })
}

pub fn arb_snapshot() -> impl Strategy<Value = ProgramSnapshot> {
    (
        arb_program(),
        prop::collection::vec(arb_risk(), 0..4),
        prop::collection::vec(arb_milestone(), 0..4),
        prop::collection::vec(arb_dependency(), 0..3),
        prop::collection::vec(arb_adopter(), 0..3),
    )
        .prop_map(|(program, risks, milestones, dependencies, adopters)| ProgramSnapshot {
            program,
            risks,
            milestones,
            dependencies,
            adopters,
            hierarchy: None,
        })
}
