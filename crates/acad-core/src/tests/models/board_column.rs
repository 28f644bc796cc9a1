use crate::BoardColumn;

use std::str::FromStr;

#[test]
fn test_board_column_as_str() {
    assert_eq!(BoardColumn::Backlog.as_str(), "Backlog");
    assert_eq!(BoardColumn::ToDo.as_str(), "To Do");
    assert_eq!(BoardColumn::InProgress.as_str(), "In Progress");
    assert_eq!(BoardColumn::InReview.as_str(), "In Review");
    assert_eq!(BoardColumn::Completed.as_str(), "Completed");
}

#[test]
fn test_board_column_from_str_accepts_wire_and_cli_forms() {
    assert_eq!(BoardColumn::from_str("To Do").unwrap(), BoardColumn::ToDo);
    assert_eq!(BoardColumn::from_str("todo").unwrap(), BoardColumn::ToDo);
    assert_eq!(
        BoardColumn::from_str("in-progress").unwrap(),
        BoardColumn::InProgress
    );
    assert_eq!(
        BoardColumn::from_str("in_review").unwrap(),
        BoardColumn::InReview
    );
    assert_eq!(BoardColumn::from_str("done").unwrap(), BoardColumn::Completed);
    assert!(BoardColumn::from_str("archived").is_err());
}

#[test]
fn test_board_column_order_matches_index() {
    for (position, column) in BoardColumn::ALL.iter().enumerate() {
        assert_eq!(column.index(), position);
    }
}

#[test]
fn test_board_column_serde_uses_display_names() {
    let json = serde_json::to_string(&BoardColumn::InProgress).unwrap();
    assert_eq!(json, "\"In Progress\"");

    let parsed: BoardColumn = serde_json::from_str("\"To Do\"").unwrap();
    assert_eq!(parsed, BoardColumn::ToDo);
}

#[test]
fn test_board_column_default_is_backlog() {
    assert_eq!(BoardColumn::default(), BoardColumn::Backlog);
}
