//! Grouping state for the anagram trace
//!
//! This module provides the data the generator mutates and the steps observe:
//! - [`groups`]: [`GroupLog`], the append-only grouping record, and [`GroupMap`],
//!   an insertion-ordered view of it at one instant
//! - [`value`]: [`VarValue`], the displayable value of a traced variable
//!
//! # Group Keys
//!
//! Two strings are anagrams iff their character multisets are equal. The canonical
//! signature of a class is the string's characters sorted ascending by code point:
//! ```text
//! "eat" → ['e','a','t'] → ['a','e','t'] → "aet"
//! ```
//!
//! # Sharing
//!
//! The grouping state only grows, so each snapshot is the shared log plus the
//! number of keys and members it had seen. A trace over `n` strings keeps one copy
//! of each key and member no matter how many steps it records.

pub mod groups;
pub mod value;

pub use groups::{Cut, GroupLog, GroupMap};
pub use value::VarValue;

/// Compute the canonical group key of `s`: its characters sorted ascending.
pub fn group_key(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
