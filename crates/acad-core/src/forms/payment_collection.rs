use crate::{CoreError, Result as CoreResult, StudentDue};

use chrono::NaiveDate;
use serde::Serialize;

/// Payload of the "collect payment" form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCollection {
    pub collecting_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PaymentCollection {
    /// Check the amount against the recorded balance before submitting.
    /// The server re-validates; this only spares a round trip.
    #[track_caller]
    pub fn validate_against(&self, student: &StudentDue) -> CoreResult<()> {
        validate_collection_amount(self.collecting_amount, student.due_amount)
    }
}

#[track_caller]
pub fn validate_collection_amount(amount: f64, due_amount: f64) -> CoreResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::validation("collecting amount must be greater than zero"));
    }
    if amount > due_amount {
        return Err(CoreError::validation(format!(
            "collecting amount {amount:.2} exceeds due amount {due_amount:.2}"
        )));
    }
    Ok(())
}

/// Payload of the "add follow-up" form on a student with dues
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeFollowUpForm {
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_follow_up_date: Option<NaiveDate>,
}

impl FeeFollowUpForm {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        crate::forms::require_non_blank("note", &self.note)
    }
}
