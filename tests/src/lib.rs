//! Integration test support for Gridlock.
//!
//! Fixture problems and solved-table checks shared by the end-to-end
//! puzzle tests.

pub mod check;
pub mod fixtures;

pub mod prelude {
    pub use gridlock_core::{ItemRef, Label, NodeId, Problem};
    pub use gridlock_solver::{Gap, Snapshot, Solver, SolverError};

    pub use crate::check::Table;
    pub use crate::fixtures::{apply_zebra_rule, boutique, zebra, ZEBRA_RULE_COUNT};
}
