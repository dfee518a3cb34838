//! Code representations and their cross-reference to the trace
//!
//! - [`representation`]: the four [`Language`]s and their source text
//! - [`line_map`]: the constant operation kind → line table
//! - [`variables`]: which variables to show beside the active line, and how
//!
//! A step carries only its [`OperationKind`](crate::trace::OperationKind). The
//! code pane turns that into a line with [`line_for`] for whichever language is
//! active, so switching languages never touches the step sequence.

pub mod line_map;
pub mod representation;
pub mod variables;

pub use line_map::{line_for, mapped_lines, operations_at, translate_line};
pub use representation::Language;
pub use variables::{project_variables, variables_for_line, visible_variables};
