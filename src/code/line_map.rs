//! Operation kind → source line, for every representation
//!
//! Lines are 1-based. A row may map two kinds to the same line (the JavaScript
//! rendering sorts and joins in one expression), so reverse lookups return every
//! matching kind and line translation picks the first.

use super::Language;
use crate::trace::OperationKind;

// Columns follow `OperationKind::ALL`:
// InitMap, LoopEnter, ToCharArray, SortArray, BuildKey,
// CheckKeyExists, CreateNewGroup, AppendToGroup, ReturnResult
const LINES: [[usize; OperationKind::COUNT]; Language::COUNT] = [
    [3, 5, 6, 7, 8, 10, 11, 13, 16], // Java
    [3, 5, 6, 7, 8, 10, 11, 12, 14], // Python
    [2, 5, 6, 7, 8, 10, 11, 14, 21], // Go
    [2, 4, 5, 6, 6, 8, 9, 11, 14],   // JavaScript
];

/// Line highlighted in `language` for `operation`
pub fn line_for(language: Language, operation: OperationKind) -> usize {
    LINES[language.index()][operation.index()]
}

/// All kinds mapped to `line` in `language`, in operation order
pub fn operations_at(language: Language, line: usize) -> Vec<OperationKind> {
    OperationKind::ALL
        .into_iter()
        .filter(|&op| line_for(language, op) == line)
        .collect()
}

/// Translate a line of one representation into the matching line of another.
///
/// Returns `None` when `line` is not mapped to any operation in `from`.
pub fn translate_line(from: Language, line: usize, to: Language) -> Option<usize> {
    OperationKind::ALL
        .into_iter()
        .find(|&op| line_for(from, op) == line)
        .map(|op| line_for(to, op))
}

/// Sorted set of lines `language` ever highlights
pub fn mapped_lines(language: Language) -> Vec<usize> {
    let mut lines = LINES[language.index()].to_vec();
    lines.sort_unstable();
    lines.dedup();
    lines
}
