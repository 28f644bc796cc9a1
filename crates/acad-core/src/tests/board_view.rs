use crate::tests::{task, task_from};
use crate::{BoardColumn, Task, group_by_column};

use serde_json::json;

#[test]
fn test_group_by_column_has_all_lanes_in_order() {
    let tasks: Vec<Task> = Vec::new();

    let lanes = group_by_column(&tasks);

    let columns: Vec<BoardColumn> = lanes.iter().map(|lane| lane.column).collect();
    assert_eq!(columns, BoardColumn::ALL.to_vec());
    assert!(lanes.iter().all(|lane| lane.tasks.is_empty()));
}

#[test]
fn test_group_by_column_places_tasks() {
    let tasks = vec![
        task("t1", "a", "Completed"),
        task("t2", "b", "To Do"),
        task("t3", "c", "Completed"),
    ];

    let lanes = group_by_column(&tasks);

    assert_eq!(lanes[BoardColumn::ToDo.index()].tasks.len(), 1);
    assert_eq!(lanes[BoardColumn::Completed.index()].tasks.len(), 2);
    assert_eq!(lanes[BoardColumn::Backlog.index()].tasks.len(), 0);
}

#[test]
fn test_group_by_column_sorts_by_position_stably() {
    let tasks = vec![
        task_from(json!({"_id": "t1", "title": "a", "boardColumn": "Backlog", "boardPosition": 2})),
        task_from(json!({"_id": "t2", "title": "b", "boardColumn": "Backlog", "boardPosition": 0})),
        task_from(json!({"_id": "t3", "title": "c", "boardColumn": "Backlog", "boardPosition": 0})),
    ];

    let lanes = group_by_column(&tasks);

    let ids: Vec<&str> = lanes[0].tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t2", "t3", "t1"]);
}
