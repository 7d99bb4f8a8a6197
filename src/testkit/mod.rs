//! Test fixtures shared by unit and integration tests.
//!
//! Builders default every entity to program 1 and a fixed clock so tests can
//! reason about overdue milestones without touching the wall clock.
//!
//! ```rust
//! use program_health::testkit::{fixed_now, ProgramBuilder};
//!
//! let program = ProgramBuilder::complete(1, "Checkout").owner(9).build();
//! assert_eq!(program.owner_id, Some(9));
//! assert!(program.start_date.unwrap() < fixed_now());
//! ```

mod fixtures;

#[cfg(test)]
mod strategies;

pub use fixtures::{
    adopter, complete_snapshot, days_before, dependency, dependency_for, fixed_now, milestone,
    risk, risk_for, ProgramBuilder,
};

#[cfg(test)]
pub use strategies::{arb_program, arb_snapshot};
