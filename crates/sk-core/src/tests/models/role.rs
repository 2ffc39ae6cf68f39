use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Standard.as_str(), "user");
    assert_eq!(Role::Administrator.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("user").unwrap(), Role::Standard);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Administrator);
    assert!(Role::from_str("Admin").is_err());
    assert!(Role::from_str("administrator").is_err());
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::Standard);
}

#[test]
fn test_role_serializes_to_web_client_values() {
    assert_eq!(
        serde_json::to_string(&Role::Administrator).unwrap(),
        "\"admin\""
    );
    assert_eq!(serde_json::to_string(&Role::Standard).unwrap(), "\"user\"");
}
