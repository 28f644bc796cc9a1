use crate::forms::require_non_blank;
use crate::{CoreError, Result as CoreResult};

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchForm {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl BatchForm {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_blank("batch name", &self.name)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && start > end
        {
            return Err(CoreError::validation("batch cannot end before it starts"));
        }
        Ok(())
    }
}
