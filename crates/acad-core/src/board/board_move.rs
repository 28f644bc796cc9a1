use crate::{BoardColumn, CoreError, Result as CoreResult, Task};

use std::str::FromStr;

use serde::Serialize;

/// Position sent with every column move. Ordering inside a column is not
/// tracked by the board, so a moved card always lands at the top.
pub const MOVED_TASK_POSITION: i32 = 0;

/// Body of the "update board position" call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPositionUpdate {
    #[serde(skip)]
    pub task_id: String,
    pub board_column: BoardColumn,
    pub board_position: i32,
}

/// Outcome of dropping a card somewhere on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveDecision {
    /// Persist the move, then reload the board
    Move(BoardPositionUpdate),
    /// Dropped back onto its own column
    SameColumn,
    /// Dropped outside every column
    NoTarget,
}

impl MoveDecision {
    pub fn is_move(&self) -> bool {
        matches!(self, MoveDecision::Move(_))
    }
}

/// Decide what a drop of `task_id` over `over` means.
///
/// `over` is the id of whatever the card was released on: a column id
/// (its wire name) or another card, in which case that card's column is the
/// target. Anything else counts as no target. A drop with no target is a
/// no-op whatever `task_id` is; otherwise the card must be on the board.
#[track_caller]
pub fn plan_move(tasks: &[Task], task_id: &str, over: Option<&str>) -> CoreResult<MoveDecision> {
    let Some(over) = over else {
        return Ok(MoveDecision::NoTarget);
    };

    let task = tasks
        .iter()
        .find(|task| task.id == task_id)
        .ok_or_else(|| CoreError::validation(format!("task {task_id} is not on the board")))?;

    let target = match BoardColumn::from_str(over) {
        Ok(column) => column,
        Err(_) => match tasks.iter().find(|candidate| candidate.id == over) {
            Some(card) => card.board_column,
            None => return Ok(MoveDecision::NoTarget),
        },
    };

    if task.board_column == target {
        return Ok(MoveDecision::SameColumn);
    }

    Ok(MoveDecision::Move(BoardPositionUpdate {
        task_id: task.id.clone(),
        board_column: target,
        board_position: MOVED_TASK_POSITION,
    }))
}
