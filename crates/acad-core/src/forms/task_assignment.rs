use crate::forms::require_non_blank;
use crate::{CoreError, Result as CoreResult, TaskPriority, TaskTag};

use chrono::NaiveDate;
use serde::Serialize;

/// Payload of the "assign task" form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssignment {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub assigned_to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub priority: TaskPriority,
    pub tags: Vec<TaskTag>,
    /// Item texts; ids are assigned by the server
    pub checklist: Vec<ChecklistDraft>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistDraft {
    pub text: String,
}

impl TaskAssignment {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_blank("title", &self.title)?;

        if self.assigned_to.is_empty() {
            return Err(CoreError::validation("select at least one assignee"));
        }

        if self.checklist.iter().any(|item| item.text.trim().is_empty()) {
            return Err(CoreError::validation("checklist items cannot be empty"));
        }

        Ok(())
    }
}

/// Partial update of a task; unset fields are left alone by the server
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TaskTag>>,
}

impl TaskUpdate {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(ref title) = self.title {
            require_non_blank("title", title)?;
        }
        Ok(())
    }
}
