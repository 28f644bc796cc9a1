//! Equal-distribution planning for bulk lead assignment.
//!
//! Given `n` selected leads and `m` selected members, every member gets
//! `n / m` leads and the first `n % m` members (in selection order) get one
//! extra. Leads are handed out contiguously in their original order.

use crate::{CoreError, Result as CoreResult};

use serde::Serialize;

pub const EMPTY_SELECTION_MESSAGE: &str = "select leads and at least one member";

/// Leads planned for a single member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberShare {
    pub member_id: String,
    pub lead_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionPlan {
    /// Leads every member receives
    pub base: usize,
    /// Members (from the front of the selection) receiving one extra lead
    pub remainder: usize,
    /// One entry per selected member, in selection order. Members whose
    /// share is empty are kept so the plan mirrors the selection.
    pub shares: Vec<MemberShare>,
}

impl DistributionPlan {
    pub fn total_leads(&self) -> usize {
        self.shares.iter().map(|share| share.lead_ids.len()).sum()
    }

    /// Shares that actually carry leads, i.e. the calls worth issuing
    pub fn non_empty_shares(&self) -> impl Iterator<Item = &MemberShare> {
        self.shares.iter().filter(|share| !share.lead_ids.is_empty())
    }
}

/// Split `lead_ids` across `member_ids` as evenly as possible.
///
/// Fails with a validation error when either selection is empty.
#[track_caller]
pub fn plan_equal_distribution(
    lead_ids: &[String],
    member_ids: &[String],
) -> CoreResult<DistributionPlan> {
    if lead_ids.is_empty() || member_ids.is_empty() {
        return Err(CoreError::validation(EMPTY_SELECTION_MESSAGE));
    }

    let members = member_ids.len();
    let base = lead_ids.len() / members;
    let remainder = lead_ids.len() % members;

    let mut offset = 0;
    let shares = member_ids
        .iter()
        .enumerate()
        .map(|(index, member_id)| {
            let count = if index < remainder { base + 1 } else { base };
            let lead_ids = lead_ids[offset..offset + count].to_vec();
            offset += count;
            MemberShare {
                member_id: member_id.clone(),
                lead_ids,
            }
        })
        .collect();

    Ok(DistributionPlan {
        base,
        remainder,
        shares,
    })
}
