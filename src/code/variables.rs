//! Projection of a step's variables onto the code pane

use super::{line_for, Language};
use crate::snapshot::{names, Step};
use crate::trace::OperationKind;

/// Variables surfaced beside the active line, per operation kind
pub fn visible_variables(operation: OperationKind) -> &'static [&'static str] {
    match operation {
        OperationKind::InitMap => &[names::MAP],
        OperationKind::LoopEnter => &[names::STR, names::INDEX],
        OperationKind::ToCharArray | OperationKind::SortArray => &[names::ARRAY],
        OperationKind::BuildKey => &[names::KEY],
        OperationKind::CheckKeyExists => &[names::KEY_EXISTS],
        OperationKind::CreateNewGroup | OperationKind::AppendToGroup => &[names::MAP],
        OperationKind::ReturnResult => &[names::RESULT],
    }
}

/// Render the variables relevant to the step's operation as `name = value` pairs.
///
/// Names the step did not record are skipped. Returns `None` if nothing is left.
pub fn project_variables(step: &Step) -> Option<String> {
    let parts: Vec<String> = visible_variables(step.operation)
        .iter()
        .filter_map(|&name| {
            step.variable(name)
                .map(|value| format!("{} = {}", name, value.display()))
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Projection for `line` of `language`, present only on the step's active line
pub fn variables_for_line(step: &Step, language: Language, line: usize) -> Option<String> {
    if line_for(language, step.operation) == line {
        project_variables(step)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::generate;

    fn steps_for(items: &[&str]) -> crate::snapshot::StepSequence {
        let input: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        generate(&input)
    }

    #[test]
    fn test_projection_per_operation() {
        let steps = steps_for(&["eat"]);
        let shown: Vec<Option<String>> = steps.iter().map(project_variables).collect();

        assert_eq!(shown[0].as_deref(), Some("map = {}"));
        assert_eq!(shown[1].as_deref(), Some("str = \"eat\", i = 0"));
        assert_eq!(shown[2].as_deref(), Some(r#"array = ["e","a","t"]"#));
        assert_eq!(shown[3].as_deref(), Some(r#"array = ["a","e","t"]"#));
        assert_eq!(shown[4].as_deref(), Some("key = \"aet\""));
        assert_eq!(shown[5].as_deref(), Some("keyExists = false"));
        assert_eq!(shown[6].as_deref(), Some(r#"map = {"aet":[]}"#));
        assert_eq!(shown[7].as_deref(), Some(r#"map = {"aet":["eat"]}"#));
        assert_eq!(shown[8].as_deref(), Some(r#"result = [["eat"]]"#));
    }

    #[test]
    fn test_missing_variables_are_omitted() {
        let mut step = steps_for(&["ab"])[1].clone();
        step.variables.remove(names::INDEX);
        assert_eq!(project_variables(&step).as_deref(), Some("str = \"ab\""));

        step.variables.remove(names::STR);
        assert_eq!(project_variables(&step), None);
    }

    #[test]
    fn test_only_active_line_shows_variables() {
        let steps = steps_for(&["ab"]);
        let key_step = &steps[4];
        for language in Language::ALL {
            let active = line_for(language, key_step.operation);
            assert!(variables_for_line(key_step, language, active).is_some());
            assert!(variables_for_line(key_step, language, active + 100).is_none());
        }
    }
}
