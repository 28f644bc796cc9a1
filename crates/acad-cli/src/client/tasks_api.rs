use crate::{Client, ClientResult};

use acad_core::{BoardPositionUpdate, Task, TaskAssignment, TaskUpdate};

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Which tasks a board shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardScope {
    /// Every task (managers and admins)
    All,
    /// Tasks assigned to the signed-in user
    Mine,
}

impl Client {
    // =========================================================================
    // Task Operations
    // =========================================================================

    /// Create and assign a task
    pub async fn assign_task(&self, assignment: &TaskAssignment) -> ClientResult<Task> {
        assignment.validate()?;

        let req = self.idempotent_request(Method::POST, "/tasks", assignment, "")?;
        self.execute_as(req, "task").await
    }

    /// List every task
    pub async fn list_all_tasks(&self) -> ClientResult<Vec<Task>> {
        let req = self.request(Method::GET, "/tasks");
        self.execute_as(req, "tasks").await
    }

    /// List tasks assigned to the signed-in user
    pub async fn list_my_tasks(&self) -> ClientResult<Vec<Task>> {
        let req = self.request(Method::GET, "/tasks/my");
        self.execute_as(req, "tasks").await
    }

    /// List tasks for a board scope
    pub async fn list_tasks(&self, scope: BoardScope) -> ClientResult<Vec<Task>> {
        match scope {
            BoardScope::All => self.list_all_tasks().await,
            BoardScope::Mine => self.list_my_tasks().await,
        }
    }

    /// Get a task by ID
    pub async fn get_task(&self, id: &str) -> ClientResult<Task> {
        let req = self.request(Method::GET, &format!("/tasks/{}", id));
        self.execute_as(req, "task").await
    }

    /// Update task fields
    pub async fn update_task(&self, id: &str, update: &TaskUpdate) -> ClientResult<Task> {
        update.validate()?;

        let req = self
            .request(Method::PUT, &format!("/tasks/{}", id))
            .json(update);
        self.execute_as(req, "task").await
    }

    /// Persist a Kanban column move
    pub async fn update_board_position(&self, update: &BoardPositionUpdate) -> ClientResult<Value> {
        let req = self
            .request(
                Method::PATCH,
                &format!("/tasks/{}/board-position", update.task_id),
            )
            .json(update);
        self.execute(req).await
    }

    /// Comment on a task, optionally mentioning users
    pub async fn add_task_comment(
        &self,
        task_id: &str,
        text: &str,
        mentions: &[String],
    ) -> ClientResult<Task> {
        #[derive(Serialize)]
        struct CommentRequest<'a> {
            text: &'a str,
            mentions: &'a [String],
        }

        let body = CommentRequest { text, mentions };
        let req = self
            .request(Method::POST, &format!("/tasks/{}/comments", task_id))
            .json(&body);
        self.execute_as(req, "task").await
    }

    /// Tick or untick a checklist item
    pub async fn update_checklist_item(
        &self,
        task_id: &str,
        item_id: &str,
        completed: bool,
    ) -> ClientResult<Task> {
        #[derive(Serialize)]
        struct ChecklistRequest {
            completed: bool,
        }

        let req = self
            .request(
                Method::PATCH,
                &format!("/tasks/{}/checklist/{}", task_id, item_id),
            )
            .json(&ChecklistRequest { completed });
        self.execute_as(req, "task").await
    }

    /// Delete a task
    pub async fn delete_task(&self, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/tasks/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Activity Log
    // =========================================================================

    /// Recent activity across the back office
    pub async fn list_activity_logs(&self, limit: Option<u32>) -> ClientResult<Vec<acad_core::ActivityLog>> {
        let params: Vec<(&str, String)> = limit
            .map(|limit| vec![("limit", limit.to_string())])
            .unwrap_or_default();
        let req = self.request_with_query(Method::GET, "/activity-logs", &params)?;
        self.execute_as(req, "logs").await
    }
}
