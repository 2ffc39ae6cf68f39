mod cli;

use crate::App;

use std::sync::Arc;
use std::time::Duration;

use sk_catalog::ContentSource;
use sk_core::Locale;
use sk_i18n::{LocaleStore, TranslationTable};
use sk_session::{FixedClock, MockCredentialVerifier, SessionStore};
use sk_storage::MemoryStore;
use tempfile::TempDir;

const PRODUCTS_JSON: &str = r#"[
  {"id":"esp-classic","name":{"vi":"Espresso Cổ Điển","en":"Classic Espresso"},
   "description":{"vi":"Hương vị đậm đà","en":"Rich, pure essence of Arabica coffee"},
   "price":45000,"category":"espresso","featured":true,"image":"esp.jpg"},
  {"id":"cb-orange","name":{"vi":"Cold Brew Cam Tươi","en":"Orange Cold Brew"},
   "description":{"vi":"Cold brew kết hợp với cam tươi","en":"Cold brew combined with fresh orange"},
   "price":60000,"category":"coldbrew","featured":false,"image":"cb.jpg"}
]"#;

const POSTS_JSON: &str = r#"[
  {"id":"story-of-song-koffi","title":{"vi":"Câu Chuyện Sống KOFFI","en":"The Story of Song KOFFI"},
   "excerpt":{"vi":"Hành trình","en":"The journey"},"image":"story.jpg","date":"2024-01-15",
   "author":{"vi":"Đội ngũ Sống KOFFI","en":"Song KOFFI Team"},"featured":true}
]"#;

/// App over in-memory storage with content files in a temp dir.
pub(crate) fn test_app() -> (App, TempDir) {
    let temp = TempDir::new().unwrap();
    let products = temp.path().join("products.json");
    let posts = temp.path().join("posts.json");
    std::fs::write(&products, PRODUCTS_JSON).unwrap();
    std::fs::write(&posts, POSTS_JSON).unwrap();

    let storage = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::at_millis(1_700_000_000_000));
    let verifier = Arc::new(MockCredentialVerifier::new(clock.clone()));
    let session = SessionStore::new(storage.clone(), verifier, clock, Duration::ZERO);
    let locale = LocaleStore::new(storage, Arc::new(TranslationTable::builtin()), Locale::Vi);

    let app = App::new(session, locale, ContentSource::new(products, posts));
    app.start();
    (app, temp)
}
