//! Common error types for Gridlock.

use crate::{CategoryId, Label, NodeId};
use thiserror::Error;

/// Errors raised while defining a problem or resolving item references.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProblemError {
    /// A category was declared twice.
    #[error("Category declared twice: {0}")]
    DuplicateCategory(String),

    /// A label occurs twice within one category.
    #[error("Duplicate label in category '{category}': {label}")]
    DuplicateLabel { category: String, label: Label },

    /// Categories must all hold the same number of labels.
    #[error("Category '{category}' has {got} labels, expected {expected}")]
    UnevenCategories {
        category: String,
        expected: usize,
        got: usize,
    },

    /// A problem needs at least two categories to pair against each other.
    #[error("A problem needs at least two categories")]
    TooFewCategories,

    /// A category must hold at least one label.
    #[error("Category '{0}' is empty")]
    EmptyCategory(String),

    /// The empty string is reserved and cannot name a category or a label.
    #[error("Empty names are reserved: {0}")]
    ReservedName(String),

    /// A bare label matches items in more than one category.
    #[error("Ambiguous item label: {0}")]
    AmbiguousItem(Label),

    /// No item with this label exists.
    #[error("Unknown item label: {0}")]
    UnknownItem(Label),

    /// No category with this name exists.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result type for problem operations.
pub type ProblemResult<T> = Result<T, ProblemError>;

/// Errors that can occur during graph operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// Some node lost its last candidate in a category it must still bind
    /// into. The supplied rules are mutually inconsistent.
    #[error("Contradiction: {node} has no remaining candidates in category {category}")]
    Contradiction { node: NodeId, category: CategoryId },

    /// Two nodes of the same category can never pair.
    #[error("Cannot pair {a} with {b}: same category")]
    SameCategory { a: NodeId, b: NodeId },

    /// A node cannot pair with itself.
    #[error("Cannot pair {0} with itself")]
    SelfPairing(NodeId),

    /// A 1-to-many binding needs at least one target.
    #[error("Binding for {0} needs at least one target")]
    NoTargets(NodeId),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
