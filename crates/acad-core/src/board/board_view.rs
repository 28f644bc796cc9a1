use crate::{BoardColumn, Task};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardLane<'a> {
    pub column: BoardColumn,
    pub tasks: Vec<&'a Task>,
}

/// Group tasks into the five board lanes, in board order.
///
/// Every lane is present even when empty. Cards keep their server order
/// within a lane, sorted by `board_position`.
pub fn group_by_column<'a, I>(tasks: I) -> Vec<BoardLane<'a>>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut lanes: Vec<BoardLane<'a>> = BoardColumn::ALL
        .iter()
        .map(|column| BoardLane {
            column: *column,
            tasks: Vec::new(),
        })
        .collect();

    for task in tasks {
        lanes[task.board_column.index()].tasks.push(task);
    }

    for lane in &mut lanes {
        lane.tasks.sort_by_key(|task| task.board_position);
    }

    lanes
}
