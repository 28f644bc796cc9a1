use crate::{BoardColumn, TaskPriority, TaskTag, UserRef};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,

    // Assignment
    #[serde(default)]
    pub assigned_to: Vec<UserRef>,
    #[serde(default)]
    pub assigned_by: Option<UserRef>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    // Workflow
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub board_column: BoardColumn,
    #[serde(default)]
    pub board_position: i32,

    #[serde(default)]
    pub tags: Vec<TaskTag>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub comments: Vec<TaskComment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// True when `user_id` is one of the assignees
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assigned_to.iter().any(|user| user.id == user_id)
    }

    /// Completed checklist items over total, `None` for an empty checklist
    pub fn checklist_progress(&self) -> Option<(usize, usize)> {
        if self.checklist.is_empty() {
            return None;
        }
        let done = self.checklist.iter().filter(|item| item.completed).count();
        Some((done, self.checklist.len()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Assigned by the server when the item is created
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_by: Option<UserRef>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ChecklistItem {
    /// A new, not yet persisted item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            completed: false,
            completed_by: None,
            completed_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskComment {
    #[serde(default)]
    pub author: Option<UserRef>,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub mentions: Vec<UserRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}
