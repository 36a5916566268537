//! Gridlock Solver
//!
//! The orchestrator for elimination puzzles. A [`Solver`] owns the
//! possible-pairing graph and the assertion registry exclusively; every
//! rule application runs to a complete fixed point before returning, so
//! intermediate states are never observed from outside.
//!
//! Responsibilities:
//! - Resolve caller-facing item references, rejecting ambiguous ones
//! - Apply explicit rules (bind / unbind) through the graph
//! - Apply implicit rules (ordering clues) as registered assertions
//! - Re-trigger affected assertions after every severance
//! - Report progress and expose a read-only snapshot

mod error;
mod rules;
mod snapshot;
mod solver;

pub use error::{SolverError, SolverResult};
pub use rules::Gap;
pub use snapshot::{CategoryView, Snapshot};
pub use solver::Solver;
