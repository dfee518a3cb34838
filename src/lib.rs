//! # Introduction
//!
//! anagram-trace runs the "group anagrams" algorithm over a list of lowercase
//! strings and records an immutable snapshot of the algorithm state at every
//! meaningful operation. The recorded steps are then played back forward and
//! backward in a terminal UI built with [ratatui](https://docs.rs/ratatui), next
//! to the same algorithm written in Java, Python, Go and JavaScript.
//!
//! ## Pipeline
//!
//! ```text
//! Input text → parse/validate → Trace generator → StepSequence → Player → TUI
//!                                                      ↘ LineMap / variable readout
//! ```
//!
//! 1. [`input`]: parses and validates input text; built-in and random samples.
//! 2. [`grouping`]: sort-based group keys and the insertion-ordered [`grouping::GroupMap`].
//! 3. [`trace`]: runs the algorithm once and captures a [`snapshot::Step`] per operation.
//! 4. [`snapshot`]: the step record and the immutable [`snapshot::StepSequence`].
//! 5. [`code`]: the four source representations, the operation to line table and
//!    the per-line variable readout.
//! 6. [`playback`]: position, play/pause and speed over a step sequence.
//! 7. [`settings`]: persisted preferences (speed, language, star cache).
//! 8. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use anagram_trace::trace::{generate, OperationKind};
//!
//! let input: Vec<String> = ["eat", "tea", "tan"].iter().map(|s| s.to_string()).collect();
//! let steps = generate(&input);
//!
//! assert_eq!(steps.first().map(|s| s.operation), Some(OperationKind::InitMap));
//! assert_eq!(steps.last().map(|s| s.groups.len()), Some(2));
//! ```

pub mod code;
pub mod error;
pub mod grouping;
pub mod input;
pub mod logging;
pub mod playback;
pub mod settings;
pub mod snapshot;
pub mod trace;
pub mod ui;

pub use error::{Error, Result};
