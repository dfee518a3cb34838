// Step records for replaying the grouping algorithm

use crate::grouping::{GroupMap, VarValue};
use crate::trace::OperationKind;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// Variable names recorded by the generator
pub mod names {
    pub const MAP: &str = "map";
    pub const STR: &str = "str";
    pub const INDEX: &str = "i";
    pub const ARRAY: &str = "array";
    pub const KEY: &str = "key";
    pub const KEY_EXISTS: &str = "keyExists";
    pub const RESULT: &str = "result";
}

/// Variable name -> value at one step
pub type Variables = BTreeMap<&'static str, VarValue>;

/// Snapshot of the algorithm at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step_index: usize,
    #[serde(rename = "operationKind")]
    pub operation: OperationKind,
    pub description: String,
    pub variables: Variables,
    #[serde(rename = "inputArray")]
    pub input: Arc<[String]>,
    pub groups: GroupMap,
    /// Position of `current_string` in the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_key: Option<String>,
    #[serde(rename = "highlightedElements")]
    pub highlighted: Highlights,
}

impl Step {
    pub fn variable(&self, name: &str) -> Option<&VarValue> {
        self.variables.get(name)
    }

    /// Check if `s` should be drawn emphasized
    pub fn is_highlighted(&self, s: &str) -> bool {
        self.highlighted.contains(s)
    }
}

/// Strings to emphasize at a step: the current string, optionally followed by
/// the members of its group.
///
/// The group part is read from the step's own snapshot, so it is never copied.
#[derive(Clone, Default)]
pub struct Highlights {
    lead: Option<String>,
    group: Option<(GroupMap, usize)>, // snapshot and group position
}

impl Highlights {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn single(s: impl Into<String>) -> Self {
        Highlights {
            lead: Some(s.into()),
            group: None,
        }
    }

    /// `s` followed by the members of `key` in `groups`
    pub fn with_group(s: impl Into<String>, groups: &GroupMap, key: &str) -> Self {
        Highlights {
            lead: Some(s.into()),
            group: groups.position(key).map(|pos| (groups.clone(), pos)),
        }
    }

    fn group_members(&self) -> &[String] {
        match &self.group {
            Some((groups, pos)) => groups.members_at(*pos),
            None => &[],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lead
            .as_deref()
            .into_iter()
            .chain(self.group_members().iter().map(String::as_str))
    }

    pub fn contains(&self, s: &str) -> bool {
        self.lead.as_deref() == Some(s) || self.group_members().iter().any(|m| m == s)
    }

    pub fn len(&self) -> usize {
        usize::from(self.lead.is_some()) + self.group_members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

impl PartialEq for Highlights {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl fmt::Debug for Highlights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Serialize for Highlights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Ordered steps produced by one generator run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        StepSequence { steps }
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }
}

impl Index<usize> for StepSequence {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
