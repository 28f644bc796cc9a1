use crate::forms::require_non_blank;
use crate::{CoreError, Result as CoreResult};

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Colleague who covers while away; must accept the handover
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handover_to: Option<String>,
}

impl LeaveRequest {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_blank("leave type", &self.leave_type)?;
        if self.from_date > self.to_date {
            return Err(CoreError::validation("leave cannot end before it starts"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TadaRequest {
    pub amount: f64,
    pub purpose: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handover_to: Option<String>,
}

impl TadaRequest {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_blank("purpose", &self.purpose)?;
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(CoreError::validation("amount must be greater than zero"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentIncomeForm {
    pub candidate_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub amount: f64,
}

impl RecruitmentIncomeForm {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_blank("candidate name", &self.candidate_name)?;
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(CoreError::validation("amount must be greater than zero"));
        }
        Ok(())
    }
}
