use crate::{Identity, Role};

use chrono::NaiveDate;
use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};

fn joined() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

#[test]
fn given_standard_identity_when_serialize_then_uses_web_client_field_names() {
    let identity = Identity::standard(
        "user-1",
        "Coffee Lover",
        "user@songkoffi.com",
        Some("0901234567".into()),
        joined(),
    );

    let json = serde_json::to_string(&identity).unwrap();

    assert_that!(json, contains_substring("\"name\":\"Coffee Lover\""));
    assert_that!(json, contains_substring("\"role\":\"user\""));
    assert_that!(json, contains_substring("\"joinedDate\":\"2024-03-09\""));
    assert_that!(json, contains_substring("\"avatar\":"));
    assert_that!(json, contains_substring("\"phone\":\"0901234567\""));
}

#[test]
fn given_identity_without_phone_when_serialize_then_phone_omitted() {
    let identity = Identity::standard("user-2", "An", "an@example.com", None, joined());

    let json = serde_json::to_string(&identity).unwrap();

    assert!(!json.contains("phone"));
}

#[test]
fn given_web_client_record_when_deserialize_then_all_fields_restored() {
    let json = r#"{"id":"admin-1","name":"Admin KOFFI","email":"admin@songkoffi.com","role":"admin","avatar":"https://example.com/a.png","joinedDate":"2023-01-01"}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity.id.as_str(), eq("admin-1"));
    assert_that!(identity.display_name.as_str(), eq("Admin KOFFI"));
    assert_that!(identity.role, eq(Role::Administrator));
    assert_eq!(identity.avatar_url.as_deref(), Some("https://example.com/a.png"));
    assert_eq!(identity.phone, None);
    assert_that!(
        identity.joined_date,
        eq(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
    );
}

#[test]
fn given_identity_when_roundtrip_then_equal() {
    let original = Identity::administrator("admin-1", "Admin KOFFI", "admin@songkoffi.com", joined());

    let json = serde_json::to_string(&original).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[test]
fn given_malformed_date_when_deserialize_then_error() {
    let json = r#"{"id":"u","name":"n","email":"e@x","role":"user","joinedDate":"yesterday"}"#;

    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn test_avatar_url_replaces_spaces_and_tints_by_role() {
    assert_eq!(
        Identity::avatar_url_for("Admin KOFFI", Role::Administrator),
        "https://ui-avatars.com/api/?name=Admin+KOFFI&background=5D3A00&color=fff"
    );
    assert_eq!(
        Identity::avatar_url_for("newbody", Role::Standard),
        "https://ui-avatars.com/api/?name=newbody&background=8B5A2B&color=fff"
    );
}

#[test]
fn test_is_administrator_follows_role() {
    let admin = Identity::administrator("a", "A", "a@x", joined());
    let user = Identity::standard("u", "U", "u@x", None, joined());

    assert!(admin.is_administrator());
    assert!(!user.is_administrator());
}
