//! Read-only views of solver state.

use gridlock_core::{Label, NodeId};

/// One category with its labels in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub name: String,
    pub labels: Vec<Label>,
}

/// A point-in-time copy of the graph: category layout plus every
/// surviving cross-category edge (lower node id first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub categories: Vec<CategoryView>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Snapshot {
    /// Number of edges still standing in this snapshot.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
