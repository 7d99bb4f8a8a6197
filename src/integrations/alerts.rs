use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Channel, DeliveryReceipt, Notification, NotificationSink};
use crate::assessment::ProgramAssessment;
use crate::health::HealthStatus;
use crate::recommendations::{Priority, Recommendation};

/// Alerts for one assessed program.
///
/// An unhealthy score raises a status alert; every critical recommendation
/// about this program becomes an escalation. Healthy programs with no
/// critical findings produce nothing.
pub fn build_alerts(
    assessment: &ProgramAssessment,
    recommendations: &[Recommendation],
) -> Vec<Notification> {
    let mut alerts = Vec::new();
    let health = &assessment.health;

    let status_severity = match health.status {
        HealthStatus::AtRisk => Some(Priority::Critical),
        HealthStatus::NeedsAttention => Some(Priority::High),
        HealthStatus::Healthy => None,
    };
    if let Some(severity) = status_severity {
        let b = &health.breakdown;
        alerts.push(Notification {
            program_id: assessment.program_id,
            title: format!(
                "{} is {} (health {})",
                assessment.program_name, health.status, health.score
            ),
            body: format!(
                "Critical risks: {}, overdue milestones: {}, blocked dependencies: {}, missing components: {}",
                b.critical_risks, b.overdue_milestones, b.blocked_dependencies, b.missing_components
            ),
            severity,
        });
    }

    alerts.extend(
        recommendations
            .iter()
            .filter(|r| r.program_id == Some(assessment.program_id))
            .filter(|r| r.priority == Priority::Critical)
            .map(|r| Notification {
                program_id: assessment.program_id,
                title: format!("Escalation: {} ({})", r.title, assessment.program_name),
                body: format!("{} [{}]", r.description, r.pmi_reference),
                severity: Priority::Critical,
            }),
    );

    alerts
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchFailure {
    pub channel: Channel,
    pub title: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchSummary {
    pub delivered: Vec<DeliveryReceipt>,
    pub failures: Vec<DispatchFailure>,
}

/// Send every alert to every sink. Failures are collected, not propagated,
/// so one broken channel does not stop the others.
pub fn dispatch(alerts: &[Notification], sinks: &[Box<dyn NotificationSink>]) -> DispatchSummary {
    let mut summary = DispatchSummary::default();

    for alert in alerts {
        for sink in sinks {
            match sink.deliver(alert) {
                Ok(receipt) => summary.delivered.push(receipt),
                Err(e) => {
                    warn!(channel = %sink.channel(), "Delivery failed: {}", e);
                    summary.failures.push(DispatchFailure {
                        channel: sink.channel(),
                        title: alert.title.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::assess_program;
    use crate::config::ProgramHealthConfig;
    use crate::errors::{Error, Result};
    use crate::integrations::{MockIntegration, NoopSink};
    use crate::recommendations::generate_recommendations;
    use crate::snapshot::ProgramSnapshot;
    use crate::testkit::{complete_snapshot, fixed_now, ProgramBuilder};

    struct BrokenSink;

    impl NotificationSink for BrokenSink {
        fn channel(&self) -> Channel {
            Channel::Email
        }

        fn deliver(&self, _notification: &Notification) -> Result<DeliveryReceipt> {
            Err(Error::integration(Channel::Email, "smtp unavailable"))
        }
    }

    #[test]
    fn healthy_program_raises_no_alerts() {
        let snapshot = complete_snapshot(1, "Checkout");
        let assessment = assess_program(&snapshot, fixed_now(), &ProgramHealthConfig::default());
        let recs = generate_recommendations(std::slice::from_ref(&snapshot), fixed_now(), None);

        assert!(build_alerts(&assessment, &recs).is_empty());
    }

    #[test]
    fn at_risk_program_raises_status_alert_and_escalations() {
        let snapshot = ProgramSnapshot::new(ProgramBuilder::new(5, "Bare").build());
        let assessment = assess_program(&snapshot, fixed_now(), &ProgramHealthConfig::default());
        let recs = generate_recommendations(std::slice::from_ref(&snapshot), fixed_now(), None);

        let alerts = build_alerts(&assessment, &recs);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].severity, Priority::Critical);
        assert_eq!(alerts[0].title, "Bare is At Risk (health 50)");
        assert!(alerts[0].body.contains("missing components: 10"));
        assert_eq!(
            alerts[1].title,
            "Escalation: Create WBS (Bare)"
        );
    }

    #[test]
    fn escalations_ignore_other_programs() {
        let snapshot = ProgramSnapshot::new(ProgramBuilder::new(5, "Bare").build());
        let other = ProgramSnapshot::new(ProgramBuilder::new(6, "Other").build());
        let assessment = assess_program(&snapshot, fixed_now(), &ProgramHealthConfig::default());
        let recs = generate_recommendations(std::slice::from_ref(&other), fixed_now(), None);

        let alerts = build_alerts(&assessment, &recs);
        assert_eq!(alerts.len(), 1);
    }

    #[test]
    fn dispatch_collects_failures_and_continues() {
        let alert = Notification {
            program_id: 1,
            title: "Atlas is At Risk (health 40)".into(),
            body: String::new(),
            severity: Priority::Critical,
        };
        let sinks: Vec<Box<dyn NotificationSink>> = vec![
            Box::new(BrokenSink),
            Box::new(MockIntegration::new(Channel::Slack)),
            Box::new(NoopSink),
        ];

        let summary = dispatch(&[alert.clone(), alert], &sinks);

        assert_eq!(summary.delivered.len(), 4);
        assert_eq!(summary.failures.len(), 2);
        assert_eq!(summary.failures[0].channel, Channel::Email);
        assert!(summary.failures[0].error.contains("smtp unavailable"));
    }
}
