use crate::{
    AdmissionTargetForm, BatchForm, ChecklistDraft, LeadStatus, LeadStatusUpdate, LeaveRequest,
    NewLead, PaymentCollection, StudentDue, TadaRequest, TaskAssignment, TaskPriority,
    validate_collection_amount,
};

use chrono::NaiveDate;
use serde_json::json;

fn student(due: f64) -> StudentDue {
    serde_json::from_value(json!({
        "_id": "s1",
        "studentName": "Asha",
        "totalAmount": 10000.0,
        "amount": 10000.0 - due,
        "dueAmount": due
    }))
    .unwrap()
}

fn assignment() -> TaskAssignment {
    TaskAssignment {
        title: "Prepare timetable".to_string(),
        description: None,
        assigned_to: vec!["u1".to_string()],
        due_date: None,
        priority: TaskPriority::High,
        tags: vec![],
        checklist: vec![],
    }
}

// =========================================================================
// Payment collection
// =========================================================================

#[test]
fn given_amount_within_due_when_validated_then_ok() {
    let payment = PaymentCollection {
        collecting_amount: 2500.0,
        payment_method: Some("Cash".to_string()),
        next_payment_date: None,
        note: None,
    };

    assert!(payment.validate_against(&student(2500.0)).is_ok());
}

#[test]
fn given_amount_above_due_when_validated_then_rejected() {
    let payment = PaymentCollection {
        collecting_amount: 2500.01,
        payment_method: None,
        next_payment_date: None,
        note: None,
    };

    let err = payment.validate_against(&student(2500.0)).unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("exceeds due amount"));
}

#[test]
fn given_zero_or_negative_amount_when_validated_then_rejected() {
    assert!(validate_collection_amount(0.0, 100.0).is_err());
    assert!(validate_collection_amount(-5.0, 100.0).is_err());
    assert!(validate_collection_amount(f64::NAN, 100.0).is_err());
}

#[test]
fn test_payment_body_is_camel_case() {
    let payment = PaymentCollection {
        collecting_amount: 100.0,
        payment_method: None,
        next_payment_date: NaiveDate::from_ymd_opt(2026, 4, 1),
        note: None,
    };

    let body = serde_json::to_value(&payment).unwrap();

    assert_eq!(
        body,
        json!({"collectingAmount": 100.0, "nextPaymentDate": "2026-04-01"})
    );
}

// =========================================================================
// Task assignment
// =========================================================================

#[test]
fn given_blank_title_when_validated_then_title_required() {
    let form = TaskAssignment {
        title: "   ".to_string(),
        ..assignment()
    };

    let err = form.validate().unwrap_err();

    assert!(err.to_string().contains("title is required"));
}

#[test]
fn given_no_assignee_when_validated_then_rejected() {
    let form = TaskAssignment {
        assigned_to: vec![],
        ..assignment()
    };

    assert!(form.validate().is_err());
}

#[test]
fn given_empty_checklist_item_when_validated_then_rejected() {
    let form = TaskAssignment {
        checklist: vec![ChecklistDraft {
            text: String::new(),
        }],
        ..assignment()
    };

    assert!(form.validate().is_err());
    assert!(assignment().validate().is_ok());
}

// =========================================================================
// Other forms
// =========================================================================

#[test]
fn test_leave_request_dates_must_be_ordered() {
    let leave = LeaveRequest {
        leave_type: "Casual".to_string(),
        from_date: NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
        to_date: NaiveDate::from_ymd_opt(2026, 5, 9).unwrap(),
        reason: None,
        handover_to: None,
    };
    assert!(leave.validate().is_err());

    let same_day = LeaveRequest {
        to_date: leave.from_date,
        ..leave
    };
    assert!(same_day.validate().is_ok());
}

#[test]
fn test_tada_amount_must_be_positive() {
    let tada = TadaRequest {
        amount: 0.0,
        purpose: "Campus visit".to_string(),
        travel_date: None,
        handover_to: None,
    };
    assert!(tada.validate().is_err());
    assert!(TadaRequest { amount: 450.0, ..tada }.validate().is_ok());
}

#[test]
fn test_admission_target_month_range() {
    let form = AdmissionTargetForm {
        user_id: "u1".to_string(),
        month: 13,
        year: 2026,
        target: 10,
    };
    assert!(form.validate().is_err());
    assert!(AdmissionTargetForm { month: 12, ..form.clone() }.validate().is_ok());
    assert!(AdmissionTargetForm { target: 0, month: 1, ..form }.validate().is_err());
}

#[test]
fn test_new_lead_needs_contact() {
    let lead = NewLead {
        name: "Kiran".to_string(),
        phone: Some(" ".to_string()),
        email: None,
        interested_course: None,
        source: None,
    };
    assert!(lead.validate().is_err());
    assert!(
        NewLead {
            email: Some("k@x.io".to_string()),
            ..lead
        }
        .validate()
        .is_ok()
    );
}

#[test]
fn test_follow_up_status_needs_note() {
    let update = LeadStatusUpdate {
        status: LeadStatus::InFollowUp,
        note: None,
    };
    assert!(update.validate().is_err());

    let counseling = LeadStatusUpdate {
        status: LeadStatus::Counseling,
        note: None,
    };
    assert!(counseling.validate().is_ok());
}

#[test]
fn test_batch_dates_must_be_ordered() {
    let batch = BatchForm {
        name: "Morning A".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 6, 1),
        end_date: NaiveDate::from_ymd_opt(2026, 5, 1),
        ..Default::default()
    };
    assert!(batch.validate().is_err());
    assert!(BatchForm::default().validate().is_err());
}
