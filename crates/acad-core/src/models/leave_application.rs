use crate::{ApplicationStatus, HandoverStatus, UserRef};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub employee: Option<UserRef>,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub handover_to: Option<UserRef>,
    #[serde(default)]
    pub handover_status: Option<HandoverStatus>,
}

impl LeaveApplication {
    /// Inclusive number of days covered
    pub fn days(&self) -> i64 {
        (self.to_date - self.from_date).num_days() + 1
    }
}

/// Travel / daily allowance reimbursement request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TadaApplication {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub employee: Option<UserRef>,
    pub amount: f64,
    pub purpose: String,
    #[serde(default)]
    pub travel_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub handover_to: Option<UserRef>,
    #[serde(default)]
    pub handover_status: Option<HandoverStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentIncome {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub candidate_name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub submitted_by: Option<UserRef>,
}
