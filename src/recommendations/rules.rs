//! Best-practice rules, grouped by PMI process group.
//!
//! Program rules are evaluated in table order, which is process-group order;
//! emission order is the tie-breaker when ranking, so the table order is part
//! of the observable behaviour.

use chrono::{DateTime, Utc};

use super::types::{Priority, ProcessGroup, Recommendation};
use crate::config::RecommendationConfig;
use crate::health::HealthBreakdown;
use crate::snapshot::ProgramSnapshot;

/// Facts about one program that the rules test.
#[derive(Debug, Clone, Copy)]
pub struct ProgramSignals<'a> {
    pub snapshot: &'a ProgramSnapshot,
    pub breakdown: HealthBreakdown,
    pub has_description: bool,
    pub open_risks: usize,
}

impl<'a> ProgramSignals<'a> {
    pub fn collect(
        snapshot: &'a ProgramSnapshot,
        min_description_length: usize,
        as_of: DateTime<Utc>,
    ) -> Self {
        Self {
            snapshot,
            breakdown: HealthBreakdown::from_snapshot(&snapshot.health_snapshot(0, as_of)),
            has_description: snapshot.program.has_description(min_description_length),
            open_risks: snapshot.risks.iter().filter(|r| r.is_open()).count(),
        }
    }

    fn name(&self) -> &str {
        &self.snapshot.program.name
    }
}

pub struct ProgramRule {
    pub group: ProcessGroup,
    pub priority: Priority,
    pub title: &'static str,
    pub pmi_reference: &'static str,
    pub applies: fn(&ProgramSignals<'_>) -> bool,
    pub describe: fn(&ProgramSignals<'_>) -> String,
}

impl ProgramRule {
    pub fn evaluate(&self, signals: &ProgramSignals<'_>) -> Option<Recommendation> {
        (self.applies)(signals).then(|| Recommendation {
            category: self.group,
            title: self.title.to_string(),
            description: (self.describe)(signals),
            pmi_reference: self.pmi_reference.to_string(),
            priority: self.priority,
            program_id: Some(signals.snapshot.program.id),
        })
    }
}

pub static PROGRAM_RULES: &[ProgramRule] = &[
    // Initiating
    ProgramRule {
        group: ProcessGroup::Initiating,
        priority: Priority::High,
        title: "Develop Program Charter",
        pmi_reference: "PMBOK 4.1 Develop Project Charter",
        applies: |s| !s.has_description,
        describe: |s| {
            format!(
                "{} has no meaningful description. Document scope, justification and expected benefits in a charter.",
                s.name()
            )
        },
    },
    ProgramRule {
        group: ProcessGroup::Initiating,
        priority: Priority::High,
        title: "Assign Program Owner",
        pmi_reference: "PMBOK 13.1 Identify Stakeholders",
        applies: |s| s.snapshot.program.owner_id.is_none(),
        describe: |s| {
            format!(
                "{} has no accountable owner. Name a sponsor who owns decisions and escalations.",
                s.name()
            )
        },
    },
    ProgramRule {
        group: ProcessGroup::Initiating,
        priority: Priority::High,
        title: "Define Program Objectives",
        pmi_reference: "PMBOK 4.1 Develop Project Charter",
        applies: |s| s.snapshot.program.objectives.is_empty(),
        describe: |s| {
            format!(
                "{} has no recorded objectives. Agree on measurable outcomes with stakeholders.",
                s.name()
            )
        },
    },
    // Planning
    ProgramRule {
        group: ProcessGroup::Planning,
        priority: Priority::Critical,
        title: "Create WBS",
        pmi_reference: "PMBOK 5.4 Create WBS",
        applies: |s| s.snapshot.milestones.is_empty(),
        describe: |s| {
            format!(
                "{} has no milestones. Decompose the scope into deliverables and schedule milestones for them.",
                s.name()
            )
        },
    },
    ProgramRule {
        group: ProcessGroup::Planning,
        priority: Priority::High,
        title: "Develop Program Schedule",
        pmi_reference: "PMBOK 6.5 Develop Schedule",
        applies: |s| s.snapshot.program.start_date.is_none() || s.snapshot.program.end_date.is_none(),
        describe: |s| {
            format!(
                "{} is missing a start or end date. Establish a baseline schedule.",
                s.name()
            )
        },
    },
    ProgramRule {
        group: ProcessGroup::Planning,
        priority: Priority::High,
        title: "Conduct Risk Assessment",
        pmi_reference: "PMBOK 11.2 Identify Risks",
        applies: |s| s.snapshot.risks.is_empty(),
        describe: |s| {
            format!(
                "No risks are recorded for {}. Run a risk identification workshop and populate the register.",
                s.name()
            )
        },
    },
    ProgramRule {
        group: ProcessGroup::Planning,
        priority: Priority::Medium,
        title: "Define Success Metrics",
        pmi_reference: "PMBOK 8.1 Plan Quality Management",
        applies: |s| s.snapshot.program.kpis.is_empty(),
        describe: |s| {
            format!(
                "{} has no KPIs. Define the metrics that show whether objectives are met.",
                s.name()
            )
        },
    },
    ProgramRule {
        group: ProcessGroup::Planning,
        priority: Priority::Medium,
        title: "Map Program Dependencies",
        pmi_reference: "PMBOK 6.3 Sequence Activities",
        applies: |s| s.snapshot.dependencies.is_empty(),
        describe: |s| {
            format!(
                "No dependencies are tracked for {}. Identify upstream and downstream teams this program relies on.",
                s.name()
            )
        },
    },
    // Executing
    ProgramRule {
        group: ProcessGroup::Executing,
        priority: Priority::Critical,
        title: "Resolve Blocked Dependencies",
        pmi_reference: "PMBOK 4.3 Direct and Manage Project Work",
        applies: |s| s.breakdown.blocked_dependencies > 0,
        describe: |s| {
            format!(
                "{} has {} blocked dependenc{}. Escalate to the owning teams and agree on unblock dates.",
                s.name(),
                s.breakdown.blocked_dependencies,
                if s.breakdown.blocked_dependencies == 1 { "y" } else { "ies" }
            )
        },
    },
    ProgramRule {
        group: ProcessGroup::Executing,
        priority: Priority::Medium,
        title: "Engage Adopter Teams",
        pmi_reference: "PMBOK 13.3 Manage Stakeholder Engagement",
        applies: |s| s.snapshot.adopters.is_empty(),
        describe: |s| {
            format!(
                "{} has no adopter teams. Identify the teams that must onboard and plan their engagement.",
                s.name()
            )
        },
    },
    ProgramRule {
        group: ProcessGroup::Executing,
        priority: Priority::High,
        title: "Unblock Adopter Onboarding",
        pmi_reference: "PMBOK 13.3 Manage Stakeholder Engagement",
        applies: |s| s.breakdown.blocked_adopters > 0,
        describe: |s| {
            format!(
                "{} adopter team(s) of {} are blocked. Work through their blockers with the team leads.",
                s.breakdown.blocked_adopters,
                s.name()
            )
        },
    },
    // Monitoring & Controlling
    ProgramRule {
        group: ProcessGroup::MonitoringAndControlling,
        priority: Priority::Critical,
        title: "Implement Risk Response Plans",
        pmi_reference: "PMBOK 11.6 Implement Risk Responses",
        applies: |s| s.breakdown.critical_risks > 0,
        describe: |s| {
            format!(
                "{} has {} high or critical risk(s). Assign owners and execute mitigation plans.",
                s.name(),
                s.breakdown.critical_risks
            )
        },
    },
    ProgramRule {
        group: ProcessGroup::MonitoringAndControlling,
        priority: Priority::High,
        title: "Recover Schedule Slippage",
        pmi_reference: "PMBOK 6.6 Control Schedule",
        applies: |s| s.breakdown.overdue_milestones > 0,
        describe: |s| {
            format!(
                "{} has {} overdue milestone(s). Re-plan the affected work and communicate revised dates.",
                s.name(),
                s.breakdown.overdue_milestones
            )
        },
    },
    // Closing
    ProgramRule {
        group: ProcessGroup::Closing,
        priority: Priority::Medium,
        title: "Close Out Residual Risks",
        pmi_reference: "PMBOK 4.7 Close Project or Phase",
        applies: |s| {
            s.snapshot.program.status == crate::model::ProgramStatus::Completed && s.open_risks > 0
        },
        describe: |s| {
            format!(
                "{} is completed but still has {} open risk(s). Resolve, accept or transfer them.",
                s.name(),
                s.open_risks
            )
        },
    },
    ProgramRule {
        group: ProcessGroup::Closing,
        priority: Priority::Low,
        title: "Capture Lessons Learned",
        pmi_reference: "PMBOK 4.4 Manage Project Knowledge",
        applies: |s| s.snapshot.program.status.is_closed(),
        describe: |s| {
            format!(
                "{} has closed. Hold a retrospective and publish lessons learned.",
                s.name()
            )
        },
    },
];

/// Portfolio-wide rules, evaluated once across all programs.
pub fn portfolio_recommendations(
    snapshots: &[ProgramSnapshot],
    config: &RecommendationConfig,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    if snapshots.is_empty() {
        return recommendations;
    }

    let program_count = snapshots.len();
    if program_count > config.pmo_program_threshold {
        recommendations.push(Recommendation {
            category: ProcessGroup::MonitoringAndControlling,
            title: "Establish PMO Governance".to_string(),
            description: format!(
                "{program_count} programs are running in parallel. A program management office with a shared cadence keeps priorities and resourcing aligned."
            ),
            pmi_reference: "PMI Standard for Portfolio Management: Governance".to_string(),
            priority: Priority::Medium,
            program_id: None,
        });
    }

    let total_risks: usize = snapshots.iter().map(|s| s.risks.len()).sum();
    let average = total_risks as f64 / program_count as f64;
    if average < config.min_average_risks_per_program {
        recommendations.push(Recommendation {
            category: ProcessGroup::Planning,
            title: "Perform Portfolio Risk Assessment".to_string(),
            description: format!(
                "Programs average {average:.1} recorded risks each. Run a portfolio-level risk review to surface unrecorded risks."
            ),
            pmi_reference: "PMBOK 11.1 Plan Risk Management".to_string(),
            priority: Priority::High,
            program_id: None,
        });
    }

    recommendations
}
