//! Identity types for Gridlock entities.
//!
//! A puzzle has `m` categories of `n` labels each. Every (category, label)
//! pair is a node, addressed by a flat index: node `cat * n + offset`.
//! Both identifiers are opaque to external users.

use std::fmt;

/// Index of a category within a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub u16);

impl CategoryId {
    /// Create a new CategoryId from a raw value.
    pub fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u16 {
        self.0
    }

    /// Get the raw value as an index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Flat index of a (category, label) node within a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Get the raw value as an index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}
