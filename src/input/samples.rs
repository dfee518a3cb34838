//! Built-in sample inputs and random demo input

use rand::seq::SliceRandom;
use rand::Rng;

/// A labelled built-in input
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub label: &'static str,
    pub data: &'static [&'static str],
}

impl Sample {
    pub fn to_vec(&self) -> Vec<String> {
        self.data.iter().map(|s| s.to_string()).collect()
    }
}

pub const SAMPLES: [Sample; 4] = [
    Sample {
        label: "Example 1",
        data: &["eat", "tea", "tan", "ate", "nat", "bat"],
    },
    Sample {
        label: "Example 2",
        data: &[""],
    },
    Sample {
        label: "Example 3",
        data: &["a"],
    },
    Sample {
        label: "More anagrams",
        data: &["abc", "bca", "cab", "dog", "god", "cat", "act", "tac"],
    },
];

/// Strings known to form anagram groups
const ANAGRAM_POOL: [&str; 14] = [
    "eat", "tea", "tan", "ate", "nat", "bat", "abc", "bca", "cab", "dog", "god", "cat", "act",
    "tac",
];

/// Chance of drawing from [`ANAGRAM_POOL`] instead of generating a random string
const POOL_PROBABILITY: f64 = 0.7;

/// Generate 3 to 10 strings, mostly drawn from a pool of known anagrams so the
/// demo shows non-trivial groups.
pub fn random_input<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(3..=10);
    (0..count)
        .map(|_| {
            if rng.gen_bool(POOL_PROBABILITY) {
                if let Some(s) = ANAGRAM_POOL.choose(&mut *rng) {
                    return s.to_string();
                }
            }
            let len = rng.gen_range(1..=5);
            (0..len).map(|_| rng.gen_range('a'..='z')).collect()
        })
        .collect()
}

/// Render a sequence the way it is typed back into the input box
pub fn format_input(strings: &[String]) -> String {
    serde_json::to_string(strings).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::validate_sequence;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_input_is_valid() {
        let mut rng = StdRng::seed_from_u64(49);
        for _ in 0..200 {
            let strings = random_input(&mut rng);
            assert!((3..=10).contains(&strings.len()));
            assert!(strings.iter().all(|s| (1..=5).contains(&s.len())));
            assert!(validate_sequence(&strings).is_ok());
        }
    }

    #[test]
    fn test_samples_are_valid() {
        for sample in &SAMPLES {
            assert!(validate_sequence(&sample.to_vec()).is_ok(), "{}", sample.label);
        }
    }

    #[test]
    fn test_format_input() {
        let strings = vec!["eat".to_string(), String::new()];
        assert_eq!(format_input(&strings), r#"["eat",""]"#);
    }
}
