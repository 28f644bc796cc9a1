pub mod admission_target_form;
pub mod batch_form;
pub mod lead_form;
pub mod leave_request;
pub mod payment_collection;
pub mod task_assignment;

use crate::{CoreError, Result as CoreResult};

/// Reject empty or whitespace-only required fields
#[track_caller]
pub(crate) fn require_non_blank(field: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(())
}
