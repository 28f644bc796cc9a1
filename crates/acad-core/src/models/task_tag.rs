use crate::{CoreError, Result as CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Fixed tag vocabulary offered by the task form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskTag {
    Bug,
    Feature,
    Enhancement,
    Documentation,
    Urgent,
    Meeting,
    Research,
    Design,
    Testing,
    Deployment,
}

impl TaskTag {
    pub const ALL: [TaskTag; 10] = [
        TaskTag::Bug,
        TaskTag::Feature,
        TaskTag::Enhancement,
        TaskTag::Documentation,
        TaskTag::Urgent,
        TaskTag::Meeting,
        TaskTag::Research,
        TaskTag::Design,
        TaskTag::Testing,
        TaskTag::Deployment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "Bug",
            Self::Feature => "Feature",
            Self::Enhancement => "Enhancement",
            Self::Documentation => "Documentation",
            Self::Urgent => "Urgent",
            Self::Meeting => "Meeting",
            Self::Research => "Research",
            Self::Design => "Design",
            Self::Testing => "Testing",
            Self::Deployment => "Deployment",
        }
    }
}

impl fmt::Display for TaskTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskTag {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::InvalidTaskTag {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
