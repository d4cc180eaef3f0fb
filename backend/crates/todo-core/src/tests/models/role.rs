use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Reader.as_str(), "Reader");
    assert_eq!(Role::Writer.as_str(), "Writer");
    assert_eq!(Role::Admin.as_str(), "Admin");
}

#[test]
fn test_role_from_str() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_from_str_is_case_sensitive() {
    let result = Role::from_str("admin");

    assert!(matches!(result, Err(CoreError::InvalidRole { value, .. }) if value == "admin"));
}

#[test]
fn test_role_display() {
    assert_eq!(Role::Writer.to_string(), "Writer");
}
