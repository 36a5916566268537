//! Constraint error types.

use gridlock_core::{CategoryId, GraphError, NodeId};
use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors that can occur while evaluating assertions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    /// A severance triggered by this assertion ran into a contradiction.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Both endpoints resolved, but their positions violate the bound.
    #[error("Assertion bound violated between {x} and {y} in category {category}")]
    BoundViolation {
        x: NodeId,
        y: NodeId,
        category: CategoryId,
    },

    /// Offset and range bounds need integer labels in the ordering category.
    #[error("Category {0} has non-numeric labels; only order-band bounds apply")]
    NonNumericLabels(CategoryId),
}
