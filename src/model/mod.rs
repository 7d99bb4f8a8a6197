//! Read-only entity snapshots consumed by the health core.
//!
//! Every entity deserializes from the camelCase JSON the REST layer emits.
//! Enumerated fields never fail to parse: unrecognized strings land in an
//! `Unknown` variant and absent fields default to it, so a snapshot coming
//! from a drifting schema still produces a (possibly pessimistic) assessment.

mod entities;
mod program;
mod status;

pub use entities::{
    Adopter, Bepic, Dependency, Epic, HierarchyCounts, Milestone, Risk, Step, Story,
};
pub use program::Program;
pub use status::{
    AdopterStatus, DependencyStatus, MilestoneStatus, ProgramStatus, RiskSeverity, RiskStatus,
};

/// Identifier shared by every persisted entity.
pub type EntityId = i64;
