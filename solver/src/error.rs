//! Solver error types.

use gridlock_constraint::ConstraintError;
use gridlock_core::{GraphError, ProblemError};
use thiserror::Error;

/// Result type for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;

/// Errors raised while applying rules.
///
/// Reference and category errors are detected before any mutation; graph
/// and constraint contradictions surface from the fixed-point machinery as
/// they are discovered.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Item lookup failed (unknown or ambiguous reference).
    #[error(transparent)]
    Problem(#[from] ProblemError),

    /// The graph ran into a contradiction or an invalid pairing.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// An assertion ran into a contradiction.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// Binding two items of one category is never possible.
    #[error("Cannot bind two items from category '{category}'")]
    SameCategory { category: String },

    /// 1-to-many targets must all come from a single category.
    #[error("Binding targets span more than one category")]
    CategoryMismatch,

    /// A 1-to-many binding needs at least one target.
    #[error("Binding needs at least one target")]
    NoTargets,

    /// A rule between an item and itself is meaningless.
    #[error("Cannot apply a rule between an item and itself")]
    SelfReference,

    /// At least one endpoint of an ordering rule must lie outside the
    /// ordering category.
    #[error("Both endpoints lie inside ordering category '{category}'")]
    BothInOrdering { category: String },

    /// Offset and range gaps need integer labels in the ordering category.
    #[error("Category '{category}' has non-numeric labels; use an order-based gap")]
    NonNumericOrdering { category: String },
}
