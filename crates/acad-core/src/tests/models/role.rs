use crate::Role;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn test_role_parses_known_values_case_insensitively() {
    assert_eq!(Role::from("Admin".to_string()), Role::Admin);
    assert_eq!(Role::from("manager".to_string()), Role::Manager);
    assert_eq!(Role::from("ADMISSION".to_string()), Role::Admission);
}

#[test]
fn test_role_keeps_unknown_values() {
    let role: Role = serde_json::from_str("\"hr\"").unwrap();
    assert_eq!(role, Role::Other("hr".to_string()));
    assert_eq!(serde_json::to_string(&role).unwrap(), "\"hr\"");
}

#[test]
fn test_role_permissions() {
    assert_that!(Role::Admin.is_manager(), eq(true));
    assert_that!(Role::Manager.is_manager(), eq(true));
    assert_that!(Role::Employee.is_manager(), eq(false));
    assert_that!(Role::Admission.can_manage_admissions(), eq(true));
    assert_that!(Role::Accountant.can_manage_admissions(), eq(false));
    assert_that!(Role::Accountant.can_collect_fees(), eq(true));
    assert_that!(Role::Employee.can_collect_fees(), eq(false));
}
