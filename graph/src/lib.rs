//! Gridlock Graph
//!
//! This crate provides the possible-pairing graph at the heart of the
//! elimination engine:
//! - Symmetric edge storage over the (category, label) node universe
//! - Severing operations for explicit bindings and exclusions
//! - Worklist implication propagation to an arc-consistent fixed point
//!
//! The graph knows nothing about deferred assertions; every mutating
//! operation reports the nodes it touched so the caller can re-trigger
//! whatever depends on them.

mod graph;

pub use graph::{LabelGraph, Mutation};
