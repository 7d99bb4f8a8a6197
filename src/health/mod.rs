//! Program health scoring.
//!
//! A score starts at 100 and loses a fixed number of points for each critical
//! risk, overdue milestone, blocked dependency and missing component. The
//! result is clamped to [0, 100] and mapped to a status label:
//!
//! | Score  | Status          | Color  |
//! |--------|-----------------|--------|
//! | >= 80  | Healthy         | green  |
//! | 60-79  | Needs Attention | yellow |
//! | < 60   | At Risk         | red    |
//!
//! Weights and thresholds are configurable through [`HealthConfig`](crate::config::HealthConfig).

mod calculator;
mod score;

pub use calculator::{
    calculate_health, HealthBreakdown, HealthCalculator, HealthMetrics, HealthSnapshot,
};
pub use score::{HealthColor, HealthScore, HealthStatus};
