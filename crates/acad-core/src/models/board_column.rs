use crate::{CoreError, Result as CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kanban bucket a task currently occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum BoardColumn {
    #[default]
    Backlog,
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "In Review")]
    InReview,
    Completed,
}

impl BoardColumn {
    /// Columns in board order, left to right
    pub const ALL: [BoardColumn; 5] = [
        BoardColumn::Backlog,
        BoardColumn::ToDo,
        BoardColumn::InProgress,
        BoardColumn::InReview,
        BoardColumn::Completed,
    ];

    /// Wire representation (also the column id used as a drop target)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::InReview => "In Review",
            Self::Completed => "Completed",
        }
    }

    /// Index of the column on the board
    pub fn index(&self) -> usize {
        match self {
            Self::Backlog => 0,
            Self::ToDo => 1,
            Self::InProgress => 2,
            Self::InReview => 3,
            Self::Completed => 4,
        }
    }
}

impl fmt::Display for BoardColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoardColumn {
    type Err = CoreError;

    /// Accepts the wire form ("In Progress") and command-line forms
    /// ("in-progress", "in_progress", "inprogress").
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "backlog" => Ok(Self::Backlog),
            "todo" => Ok(Self::ToDo),
            "inprogress" => Ok(Self::InProgress),
            "inreview" | "review" => Ok(Self::InReview),
            "completed" | "done" => Ok(Self::Completed),
            _ => Err(CoreError::InvalidBoardColumn {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
