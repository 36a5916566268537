//! Gridlock Constraint
//!
//! Deferred constraints ("assertions") between two nodes, mediated by an
//! ordered category. An assertion cannot usually be discharged the moment a
//! clue is declared; it is re-evaluated whenever either endpoint's
//! candidates change, severs pairings that can no longer satisfy its bound,
//! and retires itself once both endpoints resolve consistently.
//!
//! Responsibilities:
//! - Encode offset, range and order-band bounds over an ordering category
//! - Re-evaluate idempotently as the graph narrows
//! - Detect bound violations as contradictions
//! - Index live assertions by endpoint for cheap re-triggering

mod assertion;
mod error;
mod registry;

pub use assertion::{Assertion, BoundKind, Direction, Reevaluation};
pub use error::{ConstraintError, ConstraintResult};
pub use registry::{AssertionId, AssertionRegistry};
