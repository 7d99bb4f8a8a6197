//! PMI best-practice recommendations.
//!
//! Each program is checked against a fixed rule table organised by process
//! group (Initiating, Planning, Executing, Monitoring & Controlling, Closing).
//! A handful of portfolio rules then look at the program set as a whole.
//! The combined list is ranked by priority with emission order preserved
//! among equals, and optionally truncated. Display limits belong to callers
//! (see [`RecommendationConfig`](crate::config::RecommendationConfig)).

mod engine;
mod rules;
mod types;

pub use engine::{generate_recommendations, rank, RecommendationEngine};
pub use rules::{portfolio_recommendations, ProgramRule, ProgramSignals, PROGRAM_RULES};
pub use types::{Priority, ProcessGroup, Recommendation};
