// Export modules for library usage
pub mod adoption;
pub mod assessment;
pub mod cli;
pub mod commands;
pub mod completeness;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod health;
pub mod integrations;
pub mod model;
pub mod observability;
pub mod output;
pub mod recommendations;
pub mod risk;
pub mod snapshot;
pub mod testkit;

// Re-export commonly used types
pub use crate::model::{
    Adopter, AdopterStatus, Dependency, DependencyStatus, EntityId, HierarchyCounts, Milestone,
    MilestoneStatus, Program, ProgramStatus, Risk, RiskSeverity, RiskStatus,
};

pub use crate::health::{
    calculate_health, HealthBreakdown, HealthCalculator, HealthColor, HealthMetrics, HealthScore,
    HealthSnapshot, HealthStatus,
};

pub use crate::completeness::{
    analyze_completeness, CompletenessAnalyzer, CompletenessResult, RelatedEntityCounts,
    RequiredComponent,
};

pub use crate::recommendations::{
    generate_recommendations, Priority, ProcessGroup, Recommendation, RecommendationEngine,
};

pub use crate::assessment::{
    assess_portfolio, assess_program, Assessor, PortfolioReport, ProgramAssessment,
};

pub use crate::snapshot::{group_snapshots, PortfolioInput, ProgramSnapshot};

pub use crate::config::{load_config, ProgramHealthConfig};

pub use crate::errors::{Error, Result};
