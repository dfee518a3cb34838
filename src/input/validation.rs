//! Parsing and validation of user-supplied input text
//!
//! Two textual forms are accepted:
//! - a JSON array of strings: `["eat", "tea", "tan"]`
//! - a comma-separated list: `eat, tea, tan` (one surrounding quote per item is
//!   stripped, so `"eat", 'tea'` works too)
//!
//! After parsing, the sequence must hold between 1 and [`MAX_ELEMENTS`] strings,
//! each at most [`MAX_ELEMENT_LEN`] characters of `a`-`z`. The empty string is a
//! valid element.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Maximum number of strings in one input
pub const MAX_ELEMENTS: usize = 10_000;

/// Maximum length of a single string
pub const MAX_ELEMENT_LEN: usize = 100;

/// Errors raised before the generator ever sees the input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Text cannot be read as a sequence of strings
    #[error("Malformed input: {message}")]
    Malformed { message: String },

    /// Sequence or element bounds are violated
    #[error("Constraint violation: {message}")]
    Constraint { message: String },
}

impl InputError {
    fn malformed(message: impl Into<String>) -> Self {
        InputError::Malformed {
            message: message.into(),
        }
    }

    fn constraint(message: impl Into<String>) -> Self {
        InputError::Constraint {
            message: message.into(),
        }
    }
}

/// Parse raw text into a validated sequence of strings
pub fn parse_input(text: &str) -> Result<Vec<String>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::malformed(
            "enter a list of strings, e.g. [\"eat\", \"tea\", \"tan\"] or eat, tea, tan",
        ));
    }

    let strings = if trimmed.starts_with('[') {
        parse_json_array(trimmed)?
    } else {
        trimmed
            .split(',')
            .map(|item| strip_quotes(item.trim()).to_string())
            .collect()
    };

    validate_sequence(&strings)?;
    debug!("Parsed input with {} strings", strings.len());
    Ok(strings)
}

fn parse_json_array(text: &str) -> Result<Vec<String>, InputError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        InputError::malformed(format!(
            "{} (use [\"eat\", \"tea\", \"tan\"] or eat, tea, tan)",
            e
        ))
    })?;

    let Value::Array(items) = value else {
        return Err(InputError::malformed("input must be an array of strings"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s),
            _ => Err(InputError::malformed(format!(
                "element {} is not a string",
                i + 1
            ))),
        })
        .collect()
}

fn strip_quotes(item: &str) -> &str {
    let item = item.strip_prefix(['"', '\'']).unwrap_or(item);
    item.strip_suffix(['"', '\'']).unwrap_or(item)
}

/// Check the sequence bounds and every element's length and character class
pub fn validate_sequence(strings: &[String]) -> Result<(), InputError> {
    if strings.is_empty() {
        return Err(InputError::constraint("the array must not be empty"));
    }

    if strings.len() > MAX_ELEMENTS {
        return Err(InputError::constraint(format!(
            "the array holds {} strings, at most {} are allowed",
            strings.len(),
            MAX_ELEMENTS
        )));
    }

    for (i, s) in strings.iter().enumerate() {
        if s.chars().count() > MAX_ELEMENT_LEN {
            return Err(InputError::constraint(format!(
                "string {} \"{}\" is longer than {} characters",
                i + 1,
                s,
                MAX_ELEMENT_LEN
            )));
        }

        if !s.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(InputError::constraint(format!(
                "string {} \"{}\" contains characters other than a-z",
                i + 1,
                s
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        let strings = parse_input(r#"["eat", "tea", "tan"]"#).expect("valid input");
        assert_eq!(strings, vec!["eat", "tea", "tan"]);
    }

    #[test]
    fn test_parse_comma_list() {
        let strings = parse_input(" eat, \"tea\" ,'tan' ").expect("valid input");
        assert_eq!(strings, vec!["eat", "tea", "tan"]);
    }

    #[test]
    fn test_empty_string_element_is_valid() {
        assert_eq!(parse_input(r#"[""]"#), Ok(vec![String::new()]));
    }

    #[test]
    fn test_blank_text_is_malformed() {
        assert!(matches!(
            parse_input("   "),
            Err(InputError::Malformed { .. })
        ));
    }

    #[test]
    fn test_bad_json_is_malformed() {
        assert!(matches!(
            parse_input(r#"["eat", "#),
            Err(InputError::Malformed { .. })
        ));
    }

    #[test]
    fn test_non_string_element_is_malformed() {
        let err = parse_input(r#"["eat", 3]"#).unwrap_err();
        assert_eq!(
            err,
            InputError::Malformed {
                message: "element 2 is not a string".to_string()
            }
        );
    }

    #[test]
    fn test_empty_array_is_rejected() {
        assert!(matches!(
            parse_input("[]"),
            Err(InputError::Constraint { .. })
        ));
    }

    #[test]
    fn test_uppercase_is_rejected() {
        let err = parse_input("eat, Tea").unwrap_err();
        assert!(err.to_string().contains("string 2"));
        assert!(matches!(err, InputError::Constraint { .. }));
    }

    #[test]
    fn test_long_string_is_rejected() {
        let long = "a".repeat(MAX_ELEMENT_LEN + 1);
        assert!(validate_sequence(&[long]).is_err());
        assert!(validate_sequence(&["a".repeat(MAX_ELEMENT_LEN)]).is_ok());
    }

    #[test]
    fn test_too_many_strings_is_rejected() {
        let many = vec!["a".to_string(); MAX_ELEMENTS + 1];
        assert!(validate_sequence(&many).is_err());
        assert!(validate_sequence(&many[..MAX_ELEMENTS]).is_ok());
    }
}
