use crate::forms::require_non_blank;
use crate::{CoreError, Result as CoreResult};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionTargetForm {
    pub user_id: String,
    pub month: u32,
    pub year: i32,
    pub target: u32,
}

impl AdmissionTargetForm {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_blank("member", &self.user_id)?;
        if !(1..=12).contains(&self.month) {
            return Err(CoreError::validation(format!(
                "month must be 1-12, got {}",
                self.month
            )));
        }
        if self.target == 0 {
            return Err(CoreError::validation("target must be greater than zero"));
        }
        Ok(())
    }
}
