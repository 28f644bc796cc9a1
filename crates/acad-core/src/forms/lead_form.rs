use crate::forms::require_non_blank;
use crate::{CoreError, LeadStatus, Result as CoreResult};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interested_course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl NewLead {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_blank("name", &self.name)?;
        let has_contact = [&self.phone, &self.email]
            .iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()));
        if !has_contact {
            return Err(CoreError::validation("phone or email is required"));
        }
        Ok(())
    }
}

/// Status change recorded by the counselor, optionally with a follow-up note
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStatusUpdate {
    pub status: LeadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl LeadStatusUpdate {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.status == LeadStatus::InFollowUp
            && self.note.as_deref().is_none_or(|note| note.trim().is_empty())
        {
            return Err(CoreError::validation("a follow-up note is required"));
        }
        Ok(())
    }
}
