//! Registry of live assertions.

use std::collections::{HashMap, HashSet};
use std::fmt;

use gridlock_core::NodeId;

use crate::assertion::Assertion;

/// Unique identifier for a registered assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssertionId(pub u32);

impl AssertionId {
    /// Create a new AssertionId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for AssertionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.0)
    }
}

/// Owns all live assertions and indexes them by endpoint node, so a graph
/// mutation can cheaply find exactly the assertions it may affect.
///
/// An assertion appears under both of its endpoints. Notifying the same
/// node repeatedly is harmless: re-evaluation is idempotent.
#[derive(Debug, Default)]
pub struct AssertionRegistry {
    assertions: HashMap<AssertionId, Assertion>,
    by_node: HashMap<NodeId, HashSet<AssertionId>>,
    next_id: u32,
}

impl AssertionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an assertion under both of its endpoints.
    pub fn insert(&mut self, assertion: Assertion) -> AssertionId {
        let id = AssertionId::new(self.next_id);
        self.next_id += 1;
        self.by_node.entry(assertion.x()).or_default().insert(id);
        self.by_node.entry(assertion.y()).or_default().insert(id);
        self.assertions.insert(id, assertion);
        id
    }

    /// Look up a live assertion.
    pub fn get(&self, id: AssertionId) -> Option<&Assertion> {
        self.assertions.get(&id)
    }

    /// Assertions referencing a node, in id order for deterministic
    /// processing.
    pub fn interested(&self, node: NodeId) -> Vec<AssertionId> {
        let mut ids: Vec<AssertionId> = self
            .by_node
            .get(&node)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    /// Remove a discharged assertion from every index bucket.
    pub fn remove(&mut self, id: AssertionId) {
        if let Some(assertion) = self.assertions.remove(&id) {
            for node in [assertion.x(), assertion.y()] {
                if let Some(bucket) = self.by_node.get_mut(&node) {
                    bucket.remove(&id);
                    if bucket.is_empty() {
                        self.by_node.remove(&node);
                    }
                }
            }
        }
    }

    /// Number of live assertions.
    pub fn len(&self) -> usize {
        self.assertions.len()
    }

    /// Whether no assertions remain.
    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }
}
