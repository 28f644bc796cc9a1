use crate::HandoverKind;
use crate::commands::to_output;
use crate::error::Result as CliResult;
use crate::session::AppContext;

use acad_core::{
    ApplicationStatus, CoreError, HandoverStatus, LeaveRequest, RecruitmentIncomeForm,
    TadaRequest,
};

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use serde_json::Value;

#[derive(Subcommand)]
pub enum LeaveCommands {
    /// Apply for leave
    Apply {
        /// Leave type (casual, sick, annual, ...)
        #[arg(long = "type")]
        leave_type: String,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,

        #[arg(long)]
        reason: Option<String>,

        /// Colleague taking over duties (user ID)
        #[arg(long)]
        handover_to: Option<String>,
    },

    /// My leave applications
    Mine,

    /// Every leave application (managers)
    All,

    /// Approve or reject an application (managers)
    Status {
        id: String,

        /// approved or rejected
        #[arg(long)]
        status: String,

        #[arg(long)]
        remarks: Option<String>,
    },

    /// Withdraw an application
    Delete {
        id: String,
    },
}

impl LeaveCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_user()?;

        match self {
            LeaveCommands::Apply {
                leave_type,
                from,
                to,
                reason,
                handover_to,
            } => {
                let request = LeaveRequest {
                    leave_type,
                    from_date: from,
                    to_date: to,
                    reason,
                    handover_to,
                };
                to_output(&ctx.client.apply_leave(&request).await?)
            }
            LeaveCommands::Mine => to_output(&ctx.client.list_my_leaves().await?),
            LeaveCommands::All => {
                ctx.require_manager()?;
                to_output(&ctx.client.list_all_leaves().await?)
            }
            LeaveCommands::Status {
                id,
                status,
                remarks,
            } => {
                ctx.require_manager()?;
                let status = decision_status(&status)?;
                to_output(
                    &ctx.client
                        .update_leave_status(&id, status, remarks.as_deref())
                        .await?,
                )
            }
            LeaveCommands::Delete { id } => Ok(ctx.client.delete_leave(&id).await?),
        }
    }
}

#[derive(Subcommand)]
pub enum TadaCommands {
    /// Submit a TA/DA claim
    Apply {
        #[arg(long)]
        amount: f64,

        #[arg(long)]
        purpose: String,

        /// Travel date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Colleague taking over duties (user ID)
        #[arg(long)]
        handover_to: Option<String>,
    },

    /// My claims
    Mine,

    /// Every claim (managers and accountants)
    All,

    /// Approve, reject or mark a claim as paid
    Status {
        id: String,

        /// approved, rejected or paid
        #[arg(long)]
        status: String,

        #[arg(long)]
        remarks: Option<String>,
    },

    /// Withdraw a claim
    Delete {
        id: String,
    },
}

impl TadaCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_user()?;

        match self {
            TadaCommands::Apply {
                amount,
                purpose,
                date,
                handover_to,
            } => {
                let request = TadaRequest {
                    amount,
                    purpose,
                    travel_date: date,
                    handover_to,
                };
                to_output(&ctx.client.apply_tada(&request).await?)
            }
            TadaCommands::Mine => to_output(&ctx.client.list_my_tada().await?),
            TadaCommands::All => to_output(&ctx.client.list_all_tada().await?),
            TadaCommands::Status {
                id,
                status,
                remarks,
            } => {
                let status: ApplicationStatus = status.parse()?;
                if status == ApplicationStatus::Paid {
                    ctx.require_fee_collector()?;
                } else {
                    ctx.require_manager()?;
                }
                to_output(
                    &ctx.client
                        .update_tada_status(&id, status, remarks.as_deref())
                        .await?,
                )
            }
            TadaCommands::Delete { id } => Ok(ctx.client.delete_tada(&id).await?),
        }
    }
}

/// Approval decisions only; pending is not a target state
fn decision_status(value: &str) -> CliResult<ApplicationStatus> {
    match value.parse::<ApplicationStatus>()? {
        status @ (ApplicationStatus::Approved | ApplicationStatus::Rejected) => Ok(status),
        other => Err(CoreError::validation(format!("cannot set status to {other}")).into()),
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum HandoverKindArg {
    Leave,
    Tada,
}

impl From<HandoverKindArg> for HandoverKind {
    fn from(arg: HandoverKindArg) -> Self {
        match arg {
            HandoverKindArg::Leave => HandoverKind::Leave,
            HandoverKindArg::Tada => HandoverKind::Tada,
        }
    }
}

#[derive(Subcommand)]
pub enum HandoverCommands {
    /// Handovers waiting on me
    Pending,

    /// Accept or deny a handover
    Respond {
        #[arg(value_enum)]
        kind: HandoverKindArg,

        /// Application ID
        id: String,

        /// accept or deny
        #[arg(long)]
        status: String,
    },
}

impl HandoverCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_user()?;

        match self {
            HandoverCommands::Pending => Ok(ctx.client.list_pending_handovers().await?),
            HandoverCommands::Respond { kind, id, status } => {
                let status: HandoverStatus = status.parse()?;
                if status == HandoverStatus::Pending {
                    return Err(CoreError::validation("respond with accept or deny").into());
                }
                Ok(ctx
                    .client
                    .respond_to_handover(kind.into(), &id, status)
                    .await?)
            }
        }
    }
}

#[derive(Subcommand)]
pub enum IncomeCommands {
    /// List recruitment income records
    List,

    /// Record income from a placed candidate
    Create {
        #[arg(long)]
        candidate: String,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        amount: f64,
    },

    /// Update a record
    Update {
        id: String,

        #[arg(long)]
        candidate: String,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        amount: f64,
    },

    /// Delete a record
    Delete {
        id: String,
    },

    /// Approve a record (managers)
    Approve {
        id: String,
    },

    /// Reject a record (managers)
    Reject {
        id: String,
    },
}

impl IncomeCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_user()?;

        match self {
            IncomeCommands::List => to_output(&ctx.client.list_recruitment_income().await?),
            IncomeCommands::Create {
                candidate,
                company,
                amount,
            } => {
                let form = RecruitmentIncomeForm {
                    candidate_name: candidate,
                    company,
                    amount,
                };
                to_output(&ctx.client.create_recruitment_income(&form).await?)
            }
            IncomeCommands::Update {
                id,
                candidate,
                company,
                amount,
            } => {
                let form = RecruitmentIncomeForm {
                    candidate_name: candidate,
                    company,
                    amount,
                };
                to_output(&ctx.client.update_recruitment_income(&id, &form).await?)
            }
            IncomeCommands::Delete { id } => {
                Ok(ctx.client.delete_recruitment_income(&id).await?)
            }
            IncomeCommands::Approve { id } => {
                ctx.require_manager()?;
                to_output(&ctx.client.approve_recruitment_income(&id).await?)
            }
            IncomeCommands::Reject { id } => {
                ctx.require_manager()?;
                to_output(&ctx.client.reject_recruitment_income(&id).await?)
            }
        }
    }
}
