use crate::{CoreError, Result as CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Admissions pipeline stage of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LeadStatus {
    #[default]
    Assigned,
    Counseling,
    #[serde(rename = "In Follow Up")]
    InFollowUp,
    Admitted,
    #[serde(rename = "Not Admitted")]
    NotAdmitted,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "Assigned",
            Self::Counseling => "Counseling",
            Self::InFollowUp => "In Follow Up",
            Self::Admitted => "Admitted",
            Self::NotAdmitted => "Not Admitted",
        }
    }

    /// Admitted and Not Admitted end the pipeline
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Admitted | Self::NotAdmitted)
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "assigned" => Ok(Self::Assigned),
            "counseling" => Ok(Self::Counseling),
            "infollowup" | "followup" => Ok(Self::InFollowUp),
            "admitted" => Ok(Self::Admitted),
            "notadmitted" => Ok(Self::NotAdmitted),
            _ => Err(CoreError::InvalidLeadStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
