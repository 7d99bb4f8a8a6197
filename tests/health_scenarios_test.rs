//! End-to-end scoring of the three reference programs: an empty shell, a
//! fully planned program and a program in trouble.

use pretty_assertions::assert_eq;
use program_health::testkit::{
    complete_snapshot, days_before, dependency, fixed_now, milestone, risk, ProgramBuilder,
};
use program_health::{
    analyze_completeness, assess_program, calculate_health, DependencyStatus, HealthColor,
    HealthSnapshot, HealthStatus, MilestoneStatus, ProgramHealthConfig, ProgramSnapshot,
    RequiredComponent, RiskSeverity,
};

#[test]
fn empty_program_misses_everything() {
    let program = ProgramBuilder::new(1, "Shell").description("").build();
    let snapshot = ProgramSnapshot::new(program);

    let completeness = analyze_completeness(&snapshot.program, &snapshot.counts());
    assert_eq!(completeness.percentage, 0);
    assert_eq!(completeness.missing, RequiredComponent::CORE.to_vec());

    let health = calculate_health(&snapshot.health_snapshot(completeness.missing_count(), fixed_now()));
    assert_eq!(health.score.value(), 50);
    assert_eq!(health.status, HealthStatus::AtRisk);
    assert_eq!(health.color, HealthColor::Red);
}

#[test]
fn complete_program_is_healthy() {
    let snapshot = complete_snapshot(2, "Checkout");

    let assessment = assess_program(&snapshot, fixed_now(), &ProgramHealthConfig::default());

    assert!(assessment.completeness.missing.is_empty());
    assert_eq!(assessment.completeness.percentage, 100);
    assert_eq!(assessment.health.score.value(), 100);
    assert_eq!(assessment.health.status, HealthStatus::Healthy);
    assert_eq!(assessment.health.color, HealthColor::Green);
}

#[test]
fn troubled_program_clamps_to_zero() {
    let now = fixed_now();
    let risks: Vec<_> = (1..=5).map(|id| risk(id, RiskSeverity::Critical)).collect();
    let milestones: Vec<_> = (1..=3)
        .map(|id| milestone(id, MilestoneStatus::InProgress, Some(days_before(now, 7 * id))))
        .collect();
    let dependencies = vec![
        dependency(1, DependencyStatus::Blocked),
        dependency(2, DependencyStatus::Blocked),
    ];

    let health = calculate_health(&HealthSnapshot {
        risks: &risks,
        milestones: &milestones,
        dependencies: &dependencies,
        ..HealthSnapshot::empty(now)
    });

    assert_eq!(health.breakdown.critical_risks, 5);
    assert_eq!(health.breakdown.overdue_milestones, 3);
    assert_eq!(health.breakdown.blocked_dependencies, 2);
    assert_eq!(health.score.value(), 0);
    assert_eq!(health.status, HealthStatus::AtRisk);
}

#[test]
fn completed_overdue_milestones_do_not_count() {
    let now = fixed_now();
    let milestones = vec![
        milestone(1, MilestoneStatus::Completed, Some(days_before(now, 30))),
        milestone(2, MilestoneStatus::Delayed, Some(days_before(now, 1))),
        milestone(3, MilestoneStatus::NotStarted, None),
    ];

    let health = calculate_health(&HealthSnapshot {
        milestones: &milestones,
        ..HealthSnapshot::empty(now)
    });

    assert_eq!(health.breakdown.overdue_milestones, 1);
    assert_eq!(health.score.value(), 90);
    assert_eq!(health.status, HealthStatus::Healthy);
}

#[test]
fn stricter_thresholds_change_the_label_not_the_score() {
    let config: ProgramHealthConfig = toml::from_str(
        "[health]\nhealthy_threshold = 95\nattention_threshold = 85\n",
    )
    .unwrap();
    let mut snapshot = complete_snapshot(3, "Search");
    snapshot.risks.push(risk(9, RiskSeverity::High));

    let assessment = assess_program(&snapshot, fixed_now(), &config);

    assert_eq!(assessment.health.score.value(), 85);
    assert_eq!(assessment.health.status, HealthStatus::NeedsAttention);
}
