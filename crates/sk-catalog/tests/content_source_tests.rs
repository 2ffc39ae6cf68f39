use std::path::PathBuf;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use sk_catalog::{
    CategoryFilter, ContentError, ContentSource, MenuQuery, ProductCategory, featured,
    featured_posts, format_vnd,
};
use sk_core::Locale;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_source() -> ContentSource {
    ContentSource::new(fixture("products.json"), fixture("posts.json"))
}

#[test]
fn given_fixture_files_when_loaded_then_all_entries_parsed() {
    let source = fixture_source();

    let products = source.load_products();
    let posts = source.load_posts();

    assert_that!(products, ok(anything()));
    assert_that!(posts, ok(anything()));
    assert_that!(products.unwrap().len(), eq(5));
    assert_that!(posts.unwrap().len(), eq(2));
}

#[test]
fn given_loaded_menu_when_browsing_signature_then_price_formatted() {
    let products = fixture_source().load_products().unwrap();
    let query = MenuQuery::new(CategoryFilter::Only(ProductCategory::Signature), "");

    let result = query.apply(&products, Locale::En);

    assert_that!(result.len(), eq(1));
    assert_that!(result[0].name.get(Locale::En).as_str(), eq("Song KOFFI Special"));
    assert_that!(format_vnd(result[0].price), eq("65.000\u{a0}₫"));
}

#[test]
fn given_loaded_content_when_featured_then_home_page_selection() {
    let source = fixture_source();
    let products = source.load_products().unwrap();
    let posts = source.load_posts().unwrap();

    assert_that!(featured(&products).len(), eq(4));
    assert_that!(featured_posts(&posts).len(), eq(1));
}

#[test]
fn given_missing_file_when_loaded_then_read_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let source = ContentSource::new(temp.path().join("nope.json"), temp.path().join("nope.json"));

    let result = source.load_products();

    assert_that!(result, err(anything()));
    assert!(matches!(result.unwrap_err(), ContentError::Read { .. }));
}

#[test]
fn given_malformed_file_when_loaded_then_parse_error_names_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("posts.json");
    std::fs::write(&path, "[{\"id\": ").unwrap();
    let source = ContentSource::new(fixture("products.json"), &path);

    let result = source.load_posts();

    assert_that!(result, err(anything()));
    let message = result.unwrap_err().to_string();
    assert_that!(message, contains_substring("posts.json"));
}

#[test]
fn given_unreadable_content_when_loaded_with_fallback_then_fallback_returned() {
    let temp = tempfile::TempDir::new().unwrap();
    let source = ContentSource::new(temp.path().join("a.json"), temp.path().join("b.json"));
    let fallback = fixture_source().load_products().unwrap();

    let products = source.load_products_or(fallback.clone());
    let posts = source.load_posts_or(Vec::new());

    assert_eq!(products, fallback);
    assert!(posts.is_empty());
}
