use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests
// =========================================================================

#[test]
#[serial]
fn given_defaults_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_storage_file_with_parent_traversal_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("SK_STORAGE_FILE", "../outside.json");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("storage.file"));
}

#[test]
#[serial]
fn given_absolute_storage_file_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("SK_STORAGE_FILE", "/tmp/storage.json");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_latency_above_maximum_when_validate_then_error_mentions_range() {
    // Given
    let _temp = setup_config_dir();
    let _latency = EnvGuard::set("SK_SESSION_LATENCY_MS", "10001");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("0-10000"));
}

#[test]
#[serial]
fn given_latency_at_maximum_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _latency = EnvGuard::set("SK_SESSION_LATENCY_MS", "10000");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_empty_posts_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _posts = EnvGuard::set("SK_POSTS_PATH", "");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("posts_path"));
}
