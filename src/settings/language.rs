//! Display language preference

use super::SettingsStore;
use crate::code::Language;
use crate::error::Result;
use tracing::warn;

pub const LANGUAGE_KEY: &str = "selected_language";

/// Saved language, or [`Language::default`] when absent or unknown
pub fn load_language(store: &dyn SettingsStore) -> Language {
    let Some(value) = store.get(LANGUAGE_KEY) else {
        return Language::default();
    };
    match serde_json::from_value(value) {
        Ok(language) => language,
        Err(e) => {
            warn!("Ignoring saved language: {}", e);
            Language::default()
        }
    }
}

pub fn save_language(store: &mut dyn SettingsStore, language: Language) -> Result<()> {
    store.set(LANGUAGE_KEY, serde_json::to_value(language)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_round_trip_every_language() {
        let mut store = MemoryStore::new();
        for language in Language::ALL {
            save_language(&mut store, language).expect("save");
            assert_eq!(load_language(&store), language);
        }
    }

    #[test]
    fn test_default_is_java() {
        assert_eq!(load_language(&MemoryStore::new()), Language::Java);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, json!("cobol")).expect("set");
        assert_eq!(load_language(&store), Language::Java);

        store.set(LANGUAGE_KEY, json!(42)).expect("set");
        assert_eq!(load_language(&store), Language::Java);
    }

    #[test]
    fn test_stored_as_plain_name() {
        let mut store = MemoryStore::new();
        save_language(&mut store, Language::Go).expect("save");
        assert_eq!(store.get(LANGUAGE_KEY), Some(json!("golang")));
    }
}
