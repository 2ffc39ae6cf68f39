use crate::builtin::BUILTIN_ENTRIES;

use std::collections::HashMap;

use sk_core::{Locale, Localized};

/// Immutable key → localized text mapping, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<String, Localized<String>>,
}

impl TranslationTable {
    /// The site's own strings.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_ENTRIES
                .iter()
                .map(|(key, vi, en)| (key.to_string(), Localized::from_strs(vi, en))),
        )
    }

    /// Later duplicates replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Localized<String>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Localized<String>> {
        self.entries.get(key)
    }

    /// Text for `key` in `locale`, falling back to the key itself when the
    /// key is unknown or its entry is blank.
    pub fn lookup<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        match self.entries.get(key).map(|entry| entry.get(locale)) {
            Some(text) if !text.is_empty() => text,
            _ => key,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
