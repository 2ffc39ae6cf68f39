use crate::Locale;

use serde::{Deserialize, Serialize};

/// A value carried in both site languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub vi: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub fn new(vi: T, en: T) -> Self {
        Self { vi, en }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Vi => &self.vi,
            Locale::En => &self.en,
        }
    }
}

impl Localized<String> {
    pub fn from_strs(vi: &str, en: &str) -> Self {
        Self::new(vi.to_string(), en.to_string())
    }
}
