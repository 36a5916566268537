//! Gridlock Core
//!
//! Shared vocabulary for the elimination engine:
//! - Identity types for categories and nodes
//! - Label values and caller-facing item references
//! - Problem definition and its builder
//! - Common error types

mod error;
mod id;
mod label;
mod problem;

pub use error::{GraphError, GraphResult, ProblemError, ProblemResult};
pub use id::{CategoryId, NodeId};
pub use label::{ItemRef, Label};
pub use problem::{Problem, ProblemBuilder};
