//! Step-trace generation
//!
//! This module provides the core of the crate:
//! - [`operation`]: the closed set of abstract [`OperationKind`]s
//! - [`engine`]: [`generate`], which simulates anagram grouping over an input
//!   sequence and records a [`Step`](crate::snapshot::Step) after every operation
//!
//! # Execution Model
//!
//! The generator keeps one private, mutable grouping state. After each semantic
//! operation it publishes a snapshot of that state into a new step. Published
//! snapshots are never written again, so any step can be rendered in isolation
//! and the whole sequence can be replayed in either direction.
//!
//! ```text
//! InitMap
//! for each string:
//!     LoopEnter → ToCharArray → SortArray → BuildKey → CheckKeyExists
//!     → [CreateNewGroup] → AppendToGroup
//! ReturnResult
//! ```

pub mod engine;
pub mod operation;

pub use engine::{generate, generate_checked};
pub use operation::OperationKind;
