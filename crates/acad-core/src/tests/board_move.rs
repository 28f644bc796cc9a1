use crate::tests::task;
use crate::{BoardColumn, MOVED_TASK_POSITION, MoveDecision, plan_move};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};

fn board() -> Vec<crate::Task> {
    vec![
        task("t1", "Call parents", "To Do"),
        task("t2", "Update website", "In Progress"),
    ]
}

#[test]
fn given_drop_outside_columns_when_planned_then_no_target() {
    // Given
    let tasks = board();

    // When
    let decision = plan_move(&tasks, "t1", None).unwrap();

    // Then
    assert_eq!(decision, MoveDecision::NoTarget);
    assert!(!decision.is_move());
}

#[test]
fn given_drop_on_own_column_when_planned_then_same_column() {
    let tasks = board();

    let decision = plan_move(&tasks, "t1", Some("To Do")).unwrap();

    assert_eq!(decision, MoveDecision::SameColumn);
}

#[test]
fn given_drop_on_other_column_when_planned_then_move_to_top() {
    let tasks = board();

    let decision = plan_move(&tasks, "t1", Some("Completed")).unwrap();

    match decision {
        MoveDecision::Move(update) => {
            assert_eq!(update.task_id, "t1");
            assert_eq!(update.board_column, BoardColumn::Completed);
            assert_eq!(update.board_position, MOVED_TASK_POSITION);
            assert_eq!(update.board_position, 0);
        }
        other => panic!("expected a move, got {other:?}"),
    }
}

#[test]
fn given_drop_on_card_when_planned_then_target_is_cards_column() {
    let tasks = board();

    let decision = plan_move(&tasks, "t1", Some("t2")).unwrap();

    match decision {
        MoveDecision::Move(update) => assert_eq!(update.board_column, BoardColumn::InProgress),
        other => panic!("expected a move, got {other:?}"),
    }
}

#[test]
fn given_drop_on_card_in_same_column_when_planned_then_same_column() {
    let mut tasks = board();
    tasks.push(task("t3", "Order chairs", "To Do"));

    let decision = plan_move(&tasks, "t1", Some("t3")).unwrap();

    assert_eq!(decision, MoveDecision::SameColumn);
}

#[test]
fn given_unknown_target_id_when_planned_then_no_target() {
    let tasks = board();

    let decision = plan_move(&tasks, "t1", Some("somewhere-else")).unwrap();

    assert_eq!(decision, MoveDecision::NoTarget);
}

#[test]
fn given_unknown_task_when_planned_then_validation_error() {
    let tasks = board();

    let result = plan_move(&tasks, "missing", Some("Backlog"));

    let err = result.unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_position_update_body_shape() {
    let tasks = board();
    let MoveDecision::Move(update) = plan_move(&tasks, "t2", Some("backlog")).unwrap() else {
        panic!("expected a move");
    };

    let body = serde_json::to_value(&update).unwrap();

    assert_eq!(
        body,
        serde_json::json!({"boardColumn": "Backlog", "boardPosition": 0})
    );
}

#[test]
fn given_unknown_card_dropped_outside_columns_when_planned_then_no_target() {
    // Given
    let tasks = board();

    // When
    let result = plan_move(&tasks, "missing", None);

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(result.unwrap().is_move(), eq(false));
}

#[test]
fn given_unknown_card_dropped_on_column_when_planned_then_error() {
    let tasks = board();

    let result = plan_move(&tasks, "missing", Some("Completed"));

    assert_that!(result, err(anything()));
    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("missing is not on the board"));
}
