//! Completeness analysis: which required components a program is missing.
//!
//! There is one canonical rule set. The dashboard, the program detail view and
//! the recommendation engine all go through [`CompletenessAnalyzer`], so the
//! description threshold and component list cannot drift between screens.

mod analyzer;
mod components;

pub use analyzer::{
    analyze_completeness, CompletenessAnalyzer, CompletenessResult, RelatedEntityCounts,
};
pub(crate) use analyzer::rounded_percentage;
pub use components::RequiredComponent;
