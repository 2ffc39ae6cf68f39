//! Display language selection and key-based text lookup.

mod builtin;
mod locale_store;
mod translation_table;

pub use locale_store::{LANGUAGE_KEY, LocaleStore};
pub use translation_table::TranslationTable;
