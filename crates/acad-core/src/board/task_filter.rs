use crate::{Task, TaskPriority, TaskTag};

/// Client-side board filters. Every set field must match (boolean AND);
/// unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring of the title
    pub search: Option<String>,
    pub priority: Option<TaskPriority>,
    pub tag: Option<TaskTag>,
    /// User id of the assigner
    pub assigned_by: Option<String>,
    /// User id of one of the assignees
    pub assigned_to: Option<String>,
    /// Exact server status, compared case-insensitively
    pub status: Option<String>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        *self == TaskFilter::default()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(ref search) = self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !task.title.to_lowercase().contains(&needle) {
                return false;
            }
        }

        if let Some(priority) = self.priority
            && task.priority != priority
        {
            return false;
        }

        if let Some(tag) = self.tag
            && !task.tags.contains(&tag)
        {
            return false;
        }

        if let Some(ref assigned_by) = self.assigned_by {
            let by_matches = task
                .assigned_by
                .as_ref()
                .is_some_and(|user| &user.id == assigned_by);
            if !by_matches {
                return false;
            }
        }

        if let Some(ref assigned_to) = self.assigned_to
            && !task.is_assigned_to(assigned_to)
        {
            return false;
        }

        if let Some(ref status) = self.status {
            let status_matches = task
                .status
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(status));
            if !status_matches {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }
}
