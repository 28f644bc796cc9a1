use crate::UserRef;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admitted student with an outstanding admission fee balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDue {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(alias = "name")]
    pub student_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    pub total_amount: f64,
    /// Amount paid so far
    #[serde(default)]
    pub amount: f64,
    /// Remaining balance; computed and enforced by the server
    pub due_amount: f64,
    #[serde(default)]
    pub next_payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub follow_ups: Vec<FeeFollowUp>,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeFollowUp {
    pub note: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_follow_up_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub by: Option<UserRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub amount: f64,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub collected_by: Option<UserRef>,
}
