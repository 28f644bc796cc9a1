use crate::LeadStatus;

use std::str::FromStr;

#[test]
fn test_lead_status_from_str() {
    assert_eq!(
        LeadStatus::from_str("In Follow Up").unwrap(),
        LeadStatus::InFollowUp
    );
    assert_eq!(
        LeadStatus::from_str("not-admitted").unwrap(),
        LeadStatus::NotAdmitted
    );
    assert_eq!(
        LeadStatus::from_str("counseling").unwrap(),
        LeadStatus::Counseling
    );
    assert!(LeadStatus::from_str("enrolled").is_err());
}

#[test]
fn test_lead_status_closed_states() {
    assert!(LeadStatus::Admitted.is_closed());
    assert!(LeadStatus::NotAdmitted.is_closed());
    assert!(!LeadStatus::Assigned.is_closed());
    assert!(!LeadStatus::InFollowUp.is_closed());
}

#[test]
fn test_lead_status_serde_round_trip_names() {
    let json = serde_json::to_string(&LeadStatus::NotAdmitted).unwrap();
    assert_eq!(json, "\"Not Admitted\"");
}
