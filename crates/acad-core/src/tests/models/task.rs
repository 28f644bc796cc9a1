use crate::tests::task_from;
use crate::{BoardColumn, TaskPriority, TaskTag};

use serde_json::json;

#[test]
fn test_task_decodes_server_shape() {
    let task = task_from(json!({
        "_id": "t1",
        "title": "Prepare brochure",
        "assignedTo": [{"_id": "u1", "name": "Asha"}, "u2"],
        "assignedBy": {"_id": "m1", "name": "Ravi"},
        "dueDate": "2026-03-01T00:00:00.000Z",
        "priority": "High",
        "status": "In Progress",
        "boardColumn": "In Review",
        "tags": ["Design", "Urgent"],
        "checklist": [
            {"_id": "c1", "text": "Draft", "completed": true},
            {"_id": "c2", "text": "Print", "completed": false}
        ],
        "comments": [{"author": "u1", "text": "on it", "mentions": []}]
    }));

    assert_eq!(task.board_column, BoardColumn::InReview);
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.tags, vec![TaskTag::Design, TaskTag::Urgent]);
    assert_eq!(task.assigned_to.len(), 2);
    assert!(task.is_assigned_to("u2"));
    assert_eq!(task.checklist_progress(), Some((1, 2)));
    assert_eq!(task.checklist[0].id.as_deref(), Some("c1"));
    assert!(task.due_date.is_some());
}

#[test]
fn test_task_missing_column_defaults_to_backlog() {
    let task = task_from(json!({"_id": "t1", "title": "x"}));
    assert_eq!(task.board_column, BoardColumn::Backlog);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert_eq!(task.checklist_progress(), None);
}
