use crate::UserRef;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionTarget {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub user: UserRef,
    pub month: u32,
    pub year: i32,
    pub target: u32,
}

/// One row of the admission metrics table, computed server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionMetric {
    pub user: UserRef,
    #[serde(default)]
    pub target: u32,
    #[serde(default)]
    pub assigned: u32,
    #[serde(default)]
    pub counseling: u32,
    #[serde(default)]
    pub in_follow_up: u32,
    #[serde(default)]
    pub admitted: u32,
    #[serde(default)]
    pub not_admitted: u32,
}

impl AdmissionMetric {
    /// Admitted over target as a percentage, 0 when no target is set
    pub fn achievement_percent(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        f64::from(self.admitted) * 100.0 / f64::from(self.target)
    }
}
