use crate::TranslationTable;

use std::str::FromStr;
use std::sync::Arc;

use log::{debug, info, warn};
use sk_core::Locale;
use sk_storage::KeyValueStore;
use tokio::sync::watch;

/// Storage key of the chosen display language.
pub const LANGUAGE_KEY: &str = "song-koffi-language";

/// Holds the active language and resolves translation keys against it.
pub struct LocaleStore {
    storage: Arc<dyn KeyValueStore>,
    table: Arc<TranslationTable>,
    fallback: Locale,
    locale_tx: watch::Sender<Locale>,
}

impl LocaleStore {
    /// `fallback` is used until [`LocaleStore::initialize`] finds a saved value.
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        table: Arc<TranslationTable>,
        fallback: Locale,
    ) -> Self {
        let (locale_tx, _) = watch::channel(fallback);

        Self {
            storage,
            table,
            fallback,
            locale_tx,
        }
    }

    /// Adopts the saved language if it is one of the supported values.
    pub fn initialize(&self) {
        let saved = self.storage.get(LANGUAGE_KEY).unwrap_or_else(|e| {
            e.report("read", LANGUAGE_KEY);
            None
        });

        let locale = match saved.as_deref().map(Locale::from_str) {
            Some(Ok(locale)) => {
                debug!("Using saved locale {locale}");
                locale
            }
            Some(Err(_)) => {
                warn!("Ignoring unsupported saved locale, using {}", self.fallback);
                self.fallback
            }
            None => self.fallback,
        };

        self.locale_tx.send_replace(locale);
    }

    pub fn locale(&self) -> Locale {
        *self.locale_tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.locale_tx.subscribe()
    }

    /// Switches language and remembers the choice.
    pub fn set_locale(&self, locale: Locale) {
        self.locale_tx.send_replace(locale);

        if let Err(e) = self.storage.set(LANGUAGE_KEY, locale.as_str()) {
            e.report("persist", LANGUAGE_KEY);
        }

        info!("Locale set to {locale}");
    }

    /// Flips vi ↔ en and returns the new language.
    pub fn toggle(&self) -> Locale {
        let next = self.locale().toggled();
        self.set_locale(next);
        next
    }

    /// Text for `key` in the active language, or `key` itself if unknown.
    pub fn translate(&self, key: &str) -> String {
        self.table.lookup(key, self.locale()).to_string()
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }
}
