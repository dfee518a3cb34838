//! Abstract operation kinds of the grouping algorithm

use serde::Serialize;

/// What kind of action a step represents, independent of any code text.
///
/// Variants are declared in the order they can occur while processing one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationKind {
    InitMap,
    LoopEnter,
    ToCharArray,
    SortArray,
    BuildKey,
    CheckKeyExists,
    /// Only emitted when the key is new
    CreateNewGroup,
    AppendToGroup,
    ReturnResult,
}

impl OperationKind {
    pub const COUNT: usize = 9;

    pub const ALL: [OperationKind; Self::COUNT] = [
        OperationKind::InitMap,
        OperationKind::LoopEnter,
        OperationKind::ToCharArray,
        OperationKind::SortArray,
        OperationKind::BuildKey,
        OperationKind::CheckKeyExists,
        OperationKind::CreateNewGroup,
        OperationKind::AppendToGroup,
        OperationKind::ReturnResult,
    ];

    /// Column of this kind in per-kind tables
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            OperationKind::InitMap => "init map",
            OperationKind::LoopEnter => "loop",
            OperationKind::ToCharArray => "to char array",
            OperationKind::SortArray => "sort",
            OperationKind::BuildKey => "build key",
            OperationKind::CheckKeyExists => "check key",
            OperationKind::CreateNewGroup => "new group",
            OperationKind::AppendToGroup => "append",
            OperationKind::ReturnResult => "return",
        }
    }

    /// Whether the step is tied to one input string
    pub fn is_per_string(self) -> bool {
        !matches!(self, OperationKind::InitMap | OperationKind::ReturnResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, kind) in OperationKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_serialized_name() {
        let json = serde_json::to_string(&OperationKind::CheckKeyExists).expect("serialize");
        assert_eq!(json, "\"CHECK_KEY_EXISTS\"");
    }
}
