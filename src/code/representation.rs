//! Code representations of the grouping algorithm
//!
//! The same algorithm is shown in four languages. A representation is only used
//! for display: the trace itself never depends on which one is active.

use serde::{Deserialize, Serialize};

/// Language the code pane displays
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
    Python,
    #[serde(rename = "golang")]
    #[value(alias = "golang")]
    Go,
    #[value(name = "javascript", alias = "js")]
    JavaScript,
}

impl Language {
    pub const COUNT: usize = 4;

    pub const ALL: [Language; Self::COUNT] = [
        Language::Java,
        Language::Python,
        Language::Go,
        Language::JavaScript,
    ];

    /// Row of this language in per-language tables
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Python => "Python",
            Language::Go => "Go",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Full source text; line numbers in the line map are 1-based into this
    pub fn source(self) -> &'static str {
        match self {
            Language::Java => JAVA_SOURCE,
            Language::Python => PYTHON_SOURCE,
            Language::Go => GO_SOURCE,
            Language::JavaScript => JAVASCRIPT_SOURCE,
        }
    }

    pub fn line_count(self) -> usize {
        self.source().lines().count()
    }

    /// Next language in display order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Line comment marker, used by the code pane highlighter
    pub fn comment_prefix(self) -> &'static str {
        match self {
            Language::Python => "#",
            _ => "//",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Language::Java => &[
                "class", "public", "new", "for", "if", "return", "char", "String", "List", "Map",
                "HashMap", "ArrayList", "Arrays",
            ],
            Language::Python => &[
                "class", "def", "for", "in", "if", "not", "return", "list", "str", "List",
            ],
            Language::Go => &[
                "func", "for", "range", "if", "return", "make", "map", "string", "byte", "int",
                "bool", "append", "len", "sort",
            ],
            Language::JavaScript => &[
                "var", "const", "function", "for", "of", "if", "return", "new", "Map", "Array",
            ],
        }
    }
}

const JAVA_SOURCE: &str = r#"class Solution {
    public List<List<String>> groupAnagrams(String[] strs) {
        Map<String, List<String>> map = new HashMap<>();

        for (String str : strs) {
            char[] array = str.toCharArray();
            Arrays.sort(array);
            String key = new String(array);

            if (!map.containsKey(key)) {
                map.put(key, new ArrayList<>());
            }
            map.get(key).add(str);
        }

        return new ArrayList<>(map.values());
    }
}"#;

const PYTHON_SOURCE: &str = r#"class Solution:
    def groupAnagrams(self, strs: List[str]) -> List[List[str]]:
        groups = {}

        for s in strs:
            chars = list(s)
            chars.sort()
            key = "".join(chars)

            if key not in groups:
                groups[key] = []
            groups[key].append(s)

        return list(groups.values())"#;

const GO_SOURCE: &str = r#"func groupAnagrams(strs []string) [][]string {
    groups := make(map[string][]string)
    order := []string{}

    for _, str := range strs {
        array := []byte(str)
        sort.Slice(array, func(i, j int) bool { return array[i] < array[j] })
        key := string(array)

        if _, ok := groups[key]; !ok {
            groups[key] = []string{}
            order = append(order, key)
        }
        groups[key] = append(groups[key], str)
    }

    result := make([][]string, 0, len(order))
    for _, key := range order {
        result = append(result, groups[key])
    }
    return result
}"#;

const JAVASCRIPT_SOURCE: &str = r#"var groupAnagrams = function(strs) {
    const map = new Map();

    for (const str of strs) {
        const array = str.split('');
        const key = array.sort().join('');

        if (!map.has(key)) {
            map.set(key, []);
        }
        map.get(key).push(str);
    }

    return Array.from(map.values());
};"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, lang) in Language::ALL.iter().enumerate() {
            assert_eq!(lang.index(), i);
        }
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut lang = Language::Java;
        for _ in 0..Language::COUNT {
            lang = lang.next();
        }
        assert_eq!(lang, Language::Java);
        assert_eq!(Language::JavaScript.next(), Language::Java);
    }

    #[test]
    fn test_line_counts() {
        assert_eq!(Language::Java.line_count(), 18);
        assert_eq!(Language::Python.line_count(), 14);
        assert_eq!(Language::Go.line_count(), 22);
        assert_eq!(Language::JavaScript.line_count(), 15);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Language::Go).expect("serialize"),
            "\"golang\""
        );
        let lang: Language = serde_json::from_str("\"javascript\"").expect("deserialize");
        assert_eq!(lang, Language::JavaScript);
    }
}
