//! Displayable values of traced variables
//!
//! Every step records the algorithm's local variables as [`VarValue`]s. Values are
//! owned by the step, except grouping snapshots which are [`GroupMap`] views of
//! the run's shared log.
//!
//! # Display Form
//!
//! - strings are quoted: `"eat"`
//! - integers and booleans are printed verbatim: `2`, `true`
//! - composites are compact JSON with object keys sorted:
//!   `{"aet":["eat","tea"]}`, `["a","e","t"]`

use super::GroupMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// Value of a traced variable
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VarValue {
    Int(i64),
    Bool(bool),
    Str(String),
    Chars(Vec<char>),
    Groups(GroupMap),
    Lists(Vec<Vec<String>>),
}

impl VarValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            VarValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            VarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Structural JSON form. Group snapshots become objects, whose keys
    /// `serde_json` keeps sorted.
    pub fn to_json(&self) -> Value {
        match self {
            VarValue::Int(n) => Value::from(*n),
            VarValue::Bool(b) => Value::Bool(*b),
            VarValue::Str(s) => Value::String(s.clone()),
            VarValue::Chars(chars) => Value::Array(
                chars
                    .iter()
                    .map(|c| Value::String(c.to_string()))
                    .collect(),
            ),
            VarValue::Groups(groups) => {
                let object: Map<String, Value> = groups
                    .iter()
                    .map(|(key, members)| (key.to_string(), string_array(members)))
                    .collect();
                Value::Object(object)
            }
            VarValue::Lists(lists) => {
                Value::Array(lists.iter().map(|list| string_array(list)).collect())
            }
        }
    }

    /// Render the value for the code panel
    pub fn display(&self) -> String {
        match self {
            VarValue::Int(n) => n.to_string(),
            VarValue::Bool(b) => b.to_string(),
            VarValue::Str(s) => format!("\"{}\"", s),
            _ => self.to_json().to_string(),
        }
    }
}

fn string_array(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

impl From<&str> for VarValue {
    fn from(s: &str) -> Self {
        VarValue::Str(s.to_string())
    }
}

impl From<String> for VarValue {
    fn from(s: String) -> Self {
        VarValue::Str(s)
    }
}

impl From<bool> for VarValue {
    fn from(b: bool) -> Self {
        VarValue::Bool(b)
    }
}

impl From<usize> for VarValue {
    fn from(n: usize) -> Self {
        VarValue::Int(n as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::GroupLog;

    #[test]
    fn test_scalar_display() {
        assert_eq!(VarValue::from("eat").display(), "\"eat\"");
        assert_eq!(VarValue::from(3usize).display(), "3");
        assert_eq!(VarValue::from(false).display(), "false");
        assert_eq!(VarValue::from("").display(), "\"\"");
    }

    #[test]
    fn test_chars_display() {
        let value = VarValue::Chars(vec!['e', 'a', 't']);
        assert_eq!(value.display(), r#"["e","a","t"]"#);
        assert_eq!(VarValue::Chars(Vec::new()).display(), "[]");
    }

    #[test]
    fn test_groups_display_sorts_keys() {
        let mut log = GroupLog::new();
        let ant = log.insert_key("ant");
        let aet = log.insert_key("aet");
        log.push(ant, "tan".to_string());
        log.push(aet, "eat".to_string());

        let value = VarValue::Groups(log.freeze());
        assert_eq!(value.display(), r#"{"aet":["eat"],"ant":["tan"]}"#);
        assert_eq!(VarValue::Groups(GroupMap::new()).display(), "{}");
    }

    #[test]
    fn test_lists_display_keeps_order() {
        let value = VarValue::Lists(vec![vec!["b".to_string()], vec!["a".to_string()]]);
        assert_eq!(value.display(), r#"[["b"],["a"]]"#);
    }
}
