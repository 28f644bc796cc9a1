use crate::submit_guard::SubmitGuard;
use crate::{Client, ClientResult};

use acad_core::plan_equal_distribution;

use futures::future::join_all;
use log::{info, warn};
use serde::Serialize;

/// Result of one member's bulk-assign call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum MemberOutcome {
    Assigned,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAssignment {
    pub member_id: String,
    pub lead_count: usize,
    #[serde(flatten)]
    pub outcome: MemberOutcome,
}

/// Per-member outcome of an equal distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkAssignReport {
    pub total_leads: usize,
    pub remainder: usize,
    pub members: Vec<MemberAssignment>,
}

impl BulkAssignReport {
    /// Leads whose call succeeded
    pub fn assigned_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.outcome == MemberOutcome::Assigned)
            .map(|m| m.lead_count)
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &MemberAssignment> {
        self.members
            .iter()
            .filter(|m| matches!(m.outcome, MemberOutcome::Failed { .. }))
    }

    pub fn is_complete_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Human-readable summary for the operator
    pub fn summary_message(&self) -> String {
        let succeeded = self
            .members
            .iter()
            .filter(|m| m.outcome == MemberOutcome::Assigned)
            .count();

        let mut message = format!(
            "Assigned {} of {} leads across {} members",
            self.assigned_count(),
            self.total_leads,
            succeeded
        );

        if self.remainder > 0 {
            message.push_str(&format!(
                " ({} extra lead{} given to the first members)",
                self.remainder,
                if self.remainder == 1 { "" } else { "s" }
            ));
        }

        let failed: Vec<String> = self
            .failures()
            .map(|m| match m.outcome {
                MemberOutcome::Failed { ref message } => format!("{} ({})", m.member_id, message),
                MemberOutcome::Assigned => m.member_id.clone(),
            })
            .collect();

        if !failed.is_empty() {
            message.push_str(&format!("; failed for {}", failed.join(", ")));
        }

        message
    }
}

/// Split `lead_ids` equally over `member_ids` and assign each share with one
/// concurrent bulk-assign call per member.
///
/// An empty selection is rejected before any request. Members whose share is
/// empty get no call. A failing call does not abort the others; its error is
/// recorded in the report.
pub async fn distribute_leads(
    client: &Client,
    guard: &SubmitGuard,
    lead_ids: &[String],
    member_ids: &[String],
) -> ClientResult<BulkAssignReport> {
    let plan = plan_equal_distribution(lead_ids, member_ids)?;
    let _permit = guard.try_acquire()?;

    info!(
        "Distributing {} leads over {} members (base {}, remainder {})",
        plan.total_leads(),
        plan.shares.len(),
        plan.base,
        plan.remainder
    );

    let calls = plan.non_empty_shares().map(|share| async move {
        let outcome = match client
            .bulk_assign_leads(&share.lead_ids, &share.member_id)
            .await
        {
            Ok(_) => MemberOutcome::Assigned,
            Err(e) => {
                warn!("Bulk assign to {} failed: {}", share.member_id, e);
                MemberOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        MemberAssignment {
            member_id: share.member_id.clone(),
            lead_count: share.lead_ids.len(),
            outcome,
        }
    });

    let members = join_all(calls).await;

    Ok(BulkAssignReport {
        total_leads: plan.total_leads(),
        remainder: plan.remainder,
        members,
    })
}
