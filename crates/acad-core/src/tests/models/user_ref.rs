use crate::UserRef;

use serde_json::json;

#[test]
fn test_user_ref_from_bare_id() {
    let user: UserRef = serde_json::from_value(json!("u1")).unwrap();
    assert_eq!(user.id, "u1");
    assert!(user.name.is_none());
    assert_eq!(user.display_name(), "u1");
}

#[test]
fn test_user_ref_from_populated_object() {
    let user: UserRef =
        serde_json::from_value(json!({"_id": "u1", "name": "Asha", "email": "a@x.io"})).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.display_name(), "Asha");
}

#[test]
fn test_user_ref_accepts_plain_id_key() {
    let user: UserRef = serde_json::from_value(json!({"id": "u2"})).unwrap();
    assert_eq!(user.id, "u2");
}
