mod board_move;
mod board_view;
mod forms;
mod models;

use crate::Task;

use serde_json::json;

/// Build a task the way the server sends it
pub(crate) fn task(id: &str, title: &str, column: &str) -> Task {
    serde_json::from_value(json!({
        "_id": id,
        "title": title,
        "boardColumn": column,
    }))
    .unwrap()
}

pub(crate) fn task_from(value: serde_json::Value) -> Task {
    serde_json::from_value(value).unwrap()
}
