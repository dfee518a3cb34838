// Step-trace generator for anagram grouping

use crate::grouping::{Cut, GroupLog, GroupMap, VarValue};
use crate::input::{validate_sequence, InputError};
use crate::snapshot::{names, Highlights, Step, StepSequence, Variables};
use crate::trace::OperationKind;
use std::sync::Arc;

/// Generate the full step trace for `input`.
///
/// The input is trusted to satisfy the validator's contract; nothing is checked
/// here. An empty input yields just the `InitMap` and `ReturnResult` steps.
pub fn generate(input: &[String]) -> StepSequence {
    let mut tracer = Tracer::new(input);
    tracer.run();
    tracer.finish()
}

/// Validate `input` first, then [`generate`].
pub fn generate_checked(input: &[String]) -> Result<StepSequence, InputError> {
    validate_sequence(input)?;
    Ok(generate(input))
}

/// What a step is looking at: the current string, key and emphasized elements
struct Focus<'a> {
    string: Option<(usize, &'a str)>,
    key: Option<&'a str>,
    /// Emphasize the key's whole group after the string
    group: bool,
}

impl<'a> Focus<'a> {
    fn none() -> Self {
        Focus {
            string: None,
            key: None,
            group: false,
        }
    }

    fn on(index: usize, s: &'a str) -> Self {
        Focus {
            string: Some((index, s)),
            key: None,
            group: false,
        }
    }

    fn with_key(mut self, key: &'a str) -> Self {
        self.key = Some(key);
        self
    }

    fn with_group(mut self) -> Self {
        self.group = true;
        self
    }
}

/// A step recorded during the run, before the grouping log is frozen
struct Recorded {
    operation: OperationKind,
    description: String,
    variables: Variables,
    cut: Cut,
    current_index: Option<usize>,
    current_string: Option<String>,
    current_key: Option<String>,
    highlight_group: bool,
}

/// Simulates the algorithm and records a step after every operation
struct Tracer {
    /// Shared by every step
    input: Arc<[String]>,

    /// Working grouping state. Steps only remember its size at the time, and
    /// become views of the finished log in [`Tracer::finish`].
    log: GroupLog,

    recorded: Vec<Recorded>,
}

impl Tracer {
    fn new(input: &[String]) -> Self {
        Tracer {
            input: Arc::from(input),
            log: GroupLog::new(),
            recorded: Vec::new(),
        }
    }

    fn run(&mut self) {
        self.take_snapshot(
            OperationKind::InitMap,
            "Create an empty map to hold the anagram groups".to_string(),
            [],
            Focus::none(),
        );

        let input = Arc::clone(&self.input);
        for (i, s) in input.iter().enumerate() {
            self.visit(i, s);
        }

        let count = self.log.cut().keys;
        self.take_snapshot(
            OperationKind::ReturnResult,
            format!(
                "Return all groups: {} group{}",
                count,
                if count == 1 { "" } else { "s" }
            ),
            [(names::RESULT, VarValue::Lists(self.log.to_lists()))],
            Focus::none(),
        );
    }

    /// Process one input string
    fn visit(&mut self, i: usize, s: &str) {
        self.take_snapshot(
            OperationKind::LoopEnter,
            format!("Visit string {} of {}: \"{}\"", i + 1, self.input.len(), s),
            [(names::STR, VarValue::from(s)), (names::INDEX, VarValue::from(i))],
            Focus::on(i, s),
        );

        let chars: Vec<char> = s.chars().collect();
        self.take_snapshot(
            OperationKind::ToCharArray,
            format!("Split \"{}\" into characters: {}", s, format_chars(&chars)),
            [
                (names::STR, VarValue::from(s)),
                (names::ARRAY, VarValue::Chars(chars.clone())),
            ],
            Focus::on(i, s),
        );

        let mut sorted = chars;
        sorted.sort_unstable();
        self.take_snapshot(
            OperationKind::SortArray,
            format!("Sort the characters: {}", format_chars(&sorted)),
            [
                (names::STR, VarValue::from(s)),
                (names::ARRAY, VarValue::Chars(sorted.clone())),
            ],
            Focus::on(i, s),
        );

        let key: String = sorted.into_iter().collect();
        self.take_snapshot(
            OperationKind::BuildKey,
            format!("Build the group key \"{}\"", key),
            [
                (names::STR, VarValue::from(s)),
                (names::KEY, VarValue::from(key.as_str())),
            ],
            Focus::on(i, s).with_key(&key),
        );

        let existing = self.log.position(&key);
        let description = if existing.is_some() {
            format!("Key \"{}\" is already in the map", key)
        } else {
            format!("Key \"{}\" is not in the map, a new list is needed", key)
        };
        self.take_snapshot(
            OperationKind::CheckKeyExists,
            description,
            [
                (names::STR, VarValue::from(s)),
                (names::KEY, VarValue::from(key.as_str())),
                (names::KEY_EXISTS, VarValue::from(existing.is_some())),
            ],
            Focus::on(i, s).with_key(&key),
        );

        let pos = match existing {
            Some(pos) => pos,
            None => {
                let pos = self.log.insert_key(&key);
                self.take_snapshot(
                    OperationKind::CreateNewGroup,
                    format!("Create an empty list for key \"{}\"", key),
                    [
                        (names::STR, VarValue::from(s)),
                        (names::KEY, VarValue::from(key.as_str())),
                    ],
                    Focus::on(i, s).with_key(&key),
                );
                pos
            }
        };

        self.log.push(pos, s.to_string());
        self.take_snapshot(
            OperationKind::AppendToGroup,
            format!("Append \"{}\" to the list for key \"{}\"", s, key),
            [
                (names::STR, VarValue::from(s)),
                (names::KEY, VarValue::from(key.as_str())),
            ],
            Focus::on(i, s).with_key(&key).with_group(),
        );
    }

    /// Record a step with the current size of the grouping state and the given locals
    fn take_snapshot<const N: usize>(
        &mut self,
        operation: OperationKind,
        description: String,
        locals: [(&'static str, VarValue); N],
        focus: Focus<'_>,
    ) {
        debug_assert_eq!(focus.string.is_some(), operation.is_per_string());
        self.recorded.push(Recorded {
            operation,
            description,
            variables: locals.into_iter().collect(),
            cut: self.log.cut(),
            current_index: focus.string.map(|(i, _)| i),
            current_string: focus.string.map(|(_, s)| s.to_string()),
            current_key: focus.key.map(str::to_string),
            highlight_group: focus.group,
        });
    }

    /// Freeze the grouping log and turn every recorded step into a [`Step`]
    fn finish(self) -> StepSequence {
        let log = Arc::new(self.log);
        let input = self.input;

        let steps = self
            .recorded
            .into_iter()
            .enumerate()
            .map(|(step_index, recorded)| {
                let groups = GroupMap::at(&log, recorded.cut);
                let mut variables = recorded.variables;
                variables.insert(names::MAP, VarValue::Groups(groups.clone()));

                let highlighted = match (&recorded.current_string, &recorded.current_key) {
                    (Some(s), Some(key)) if recorded.highlight_group => {
                        Highlights::with_group(s.as_str(), &groups, key)
                    }
                    (Some(s), _) => Highlights::single(s.as_str()),
                    (None, _) => Highlights::none(),
                };

                Step {
                    step_index,
                    operation: recorded.operation,
                    description: recorded.description,
                    variables,
                    input: Arc::clone(&input),
                    groups,
                    current_index: recorded.current_index,
                    current_string: recorded.current_string,
                    current_key: recorded.current_key,
                    highlighted,
                }
            })
            .collect();

        StepSequence::from_steps(steps)
    }
}

/// Format characters the way a char array literal reads: `['e', 'a', 't']`
fn format_chars(chars: &[char]) -> String {
    let quoted: Vec<String> = chars.iter().map(|c| format!("'{}'", c)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn operations(steps: &StepSequence) -> Vec<OperationKind> {
        steps.iter().map(|s| s.operation).collect()
    }

    #[test]
    fn test_single_string_trace() {
        use OperationKind::*;

        let steps = generate(&strings(&["a"]));
        assert_eq!(
            operations(&steps),
            vec![
                InitMap,
                LoopEnter,
                ToCharArray,
                SortArray,
                BuildKey,
                CheckKeyExists,
                CreateNewGroup,
                AppendToGroup,
                ReturnResult,
            ]
        );
    }

    #[test]
    fn test_existing_key_skips_create() {
        use OperationKind::*;

        let steps = generate(&strings(&["ab", "ba"]));
        let second: Vec<OperationKind> = operations(&steps)[8..].to_vec();
        assert_eq!(
            second,
            vec![
                LoopEnter,
                ToCharArray,
                SortArray,
                BuildKey,
                CheckKeyExists,
                AppendToGroup,
                ReturnResult,
            ]
        );
        assert_eq!(steps.len(), 15);
    }

    #[test]
    fn test_empty_input_yields_boundary_steps() {
        let steps = generate(&[]);
        assert_eq!(
            operations(&steps),
            vec![OperationKind::InitMap, OperationKind::ReturnResult]
        );
        assert!(steps[1].groups.is_empty());
    }

    #[test]
    fn test_variables_per_operation() {
        let steps = generate(&strings(&["eat"]));

        let to_chars = &steps[2];
        assert_eq!(
            to_chars.variable(names::ARRAY),
            Some(&VarValue::Chars(vec!['e', 'a', 't']))
        );

        let sorted = &steps[3];
        assert_eq!(
            sorted.variable(names::ARRAY),
            Some(&VarValue::Chars(vec!['a', 'e', 't']))
        );

        let key = &steps[4];
        assert_eq!(key.variable(names::KEY), Some(&VarValue::from("aet")));
        assert_eq!(key.current_key.as_deref(), Some("aet"));

        let check = &steps[5];
        assert_eq!(check.variable(names::KEY_EXISTS), Some(&VarValue::Bool(false)));
        assert!(check.description.contains("not in the map"));
    }

    #[test]
    fn test_key_absent_before_build_key() {
        let steps = generate(&strings(&["eat"]));
        assert!(steps[1].current_key.is_none());
        assert!(steps[3].current_key.is_none());
        assert!(steps[4].current_key.is_some());
    }

    #[test]
    fn test_append_highlights_string_and_group() {
        let steps = generate(&strings(&["eat", "tea"]));
        let append = steps
            .iter()
            .filter(|s| s.operation == OperationKind::AppendToGroup)
            .last()
            .expect("append step");
        assert_eq!(append.highlighted.to_vec(), strings(&["tea", "eat", "tea"]));
    }

    #[test]
    fn test_check_key_sees_state_before_mutation() {
        let steps = generate(&strings(&["eat", "tea"]));
        let checks: Vec<bool> = steps
            .iter()
            .filter(|s| s.operation == OperationKind::CheckKeyExists)
            .filter_map(|s| s.variable(names::KEY_EXISTS).and_then(VarValue::as_bool))
            .collect();
        assert_eq!(checks, vec![false, true]);
    }

    #[test]
    fn test_return_result_lists_groups_in_insertion_order() {
        let steps = generate(&strings(&["tan", "eat", "nat"]));
        let last = steps.last().expect("last step");
        assert_eq!(
            last.variable(names::RESULT),
            Some(&VarValue::Lists(vec![
                strings(&["tan", "nat"]),
                strings(&["eat"]),
            ]))
        );
        assert!(last.highlighted.is_empty());
        assert!(last.current_string.is_none());
    }

    #[test]
    fn test_snapshots_do_not_alias() {
        let steps = generate(&strings(&["abc", "bca"]));
        // the first append step still sees a single member
        let first_append = steps
            .iter()
            .find(|s| s.operation == OperationKind::AppendToGroup)
            .expect("append step");
        assert_eq!(first_append.groups.get("abc").map(<[String]>::len), Some(1));
        assert_eq!(
            steps.last().and_then(|s| s.groups.get("abc")).map(<[String]>::len),
            Some(2)
        );
    }

    #[test]
    fn test_current_index_follows_repeated_strings() {
        let steps = generate(&strings(&["eat", "eat"]));
        let indices: Vec<Option<usize>> = steps.iter().map(|s| s.current_index).collect();

        let mut expected = vec![None];
        expected.extend(std::iter::repeat(Some(0)).take(7));
        expected.extend(std::iter::repeat(Some(1)).take(6));
        expected.push(None);
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_earlier_highlights_keep_their_group() {
        let steps = generate(&strings(&["ab", "ba"]));
        let appends: Vec<Vec<String>> = steps
            .iter()
            .filter(|s| s.operation == OperationKind::AppendToGroup)
            .map(|s| s.highlighted.to_vec())
            .collect();
        assert_eq!(
            appends,
            vec![strings(&["ab", "ab"]), strings(&["ba", "ab", "ba"])]
        );
    }

    #[test]
    fn test_generate_checked_rejects_invalid() {
        assert!(generate_checked(&strings(&["ABC"])).is_err());
        assert!(generate_checked(&[]).is_err());
        assert!(generate_checked(&strings(&["abc"])).is_ok());
    }

    #[test]
    fn test_format_chars() {
        assert_eq!(format_chars(&['a', 'b']), "['a', 'b']");
        assert_eq!(format_chars(&[]), "[]");
    }
}
