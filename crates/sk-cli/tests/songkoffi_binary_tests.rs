use std::path::Path;
use std::process::{Command, Output};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};
use serde_json::Value;
use tempfile::TempDir;

fn songkoffi(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_songkoffi"))
        .args(args)
        .arg("--config-dir")
        .arg(config_dir)
        .env("SK_SESSION_LATENCY_MS", "0")
        .env("SK_LOG_LEVEL", "off")
        .output()
        .unwrap()
}

fn json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn given_demo_admin_login_when_next_invocation_then_session_restored() {
    let temp = TempDir::new().unwrap();

    let login = songkoffi(temp.path(), &["demo-login", "admin"]);
    assert!(login.status.success());

    let whoami = songkoffi(temp.path(), &["whoami"]);
    let value = json(&whoami);
    assert_eq!(value["authenticated"], true);
    assert_eq!(value["user"]["role"], "admin");

    assert!(songkoffi(temp.path(), &["admin"]).status.success());
    assert!(temp.path().join("storage.json").exists());
}

#[test]
fn given_logout_when_next_invocation_then_signed_out_and_admin_refused() {
    let temp = TempDir::new().unwrap();
    songkoffi(temp.path(), &["demo-login", "admin"]);

    songkoffi(temp.path(), &["logout"]);
    let admin = songkoffi(temp.path(), &["admin"]);

    assert!(!admin.status.success());
    assert_eq!(json(&songkoffi(temp.path(), &["whoami"]))["authenticated"], false);
}

#[test]
fn given_language_set_when_next_invocation_then_translations_follow() {
    let temp = TempDir::new().unwrap();

    songkoffi(temp.path(), &["lang", "set", "en"]);
    let value = json(&songkoffi(temp.path(), &["t", "hero.cta"]));

    assert_eq!(value["locale"], "en");
    assert_eq!(value["text"], "Explore Menu");
}

#[test]
fn given_wrong_password_when_login_then_failure_with_localized_message() {
    let temp = TempDir::new().unwrap();

    let output = songkoffi(
        temp.path(),
        &["login", "--email", "admin@songkoffi.com", "--password", "x"],
    );

    assert!(!output.status.success());
    assert_that!(output.stdout.len(), eq(0));
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert_that!(stderr, contains_substring("Email hoặc mật khẩu không đúng"));
}
