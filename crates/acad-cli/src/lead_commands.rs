use crate::bulk_assign::distribute_leads;
use crate::commands::to_output;
use crate::error::Result as CliResult;
use crate::session::AppContext;
use crate::LeadQuery;

use acad_core::{LeadStatus, LeadStatusUpdate, NewLead};

use clap::Subcommand;
use log::{info, warn};
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum LeadCommands {
    /// List leads
    List {
        /// Pipeline status: assigned, counseling, in-follow-up, admitted, not-admitted
        #[arg(long)]
        status: Option<String>,

        /// Assignee user ID
        #[arg(long)]
        assigned_to: Option<String>,

        /// Name, phone or email substring
        #[arg(long)]
        search: Option<String>,

        /// Only leads nobody owns yet
        #[arg(long)]
        unassigned: bool,
    },

    /// Register a new lead
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Course the lead asked about
        #[arg(long)]
        course: Option<String>,

        /// Where the lead came from
        #[arg(long)]
        source: Option<String>,
    },

    /// Assign one lead to a member
    Assign {
        id: String,

        /// Member user ID
        #[arg(long)]
        to: String,
    },

    /// Split leads equally across members (managers)
    Distribute {
        /// Lead ID (repeatable)
        #[arg(long = "lead", conflicts_with = "unassigned")]
        leads: Vec<String>,

        /// Distribute every unassigned lead
        #[arg(long)]
        unassigned: bool,

        /// Member user ID (repeatable, in distribution order)
        #[arg(long = "member")]
        members: Vec<String>,
    },

    /// Move a lead through the pipeline
    Status {
        id: String,

        #[arg(long)]
        status: String,

        /// Required for in-follow-up
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete a lead
    Delete {
        id: String,
    },

    /// Status and assignment history of a lead
    History {
        id: String,
    },

    /// Leads assigned today
    Today,

    /// Offered courses
    Courses,
}

impl LeadCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_user()?;

        match self {
            LeadCommands::List {
                status,
                assigned_to,
                search,
                unassigned,
            } => {
                let query = LeadQuery {
                    status: status.as_deref().map(str::parse::<LeadStatus>).transpose()?,
                    assigned_to,
                    search,
                    unassigned_only: unassigned,
                };
                to_output(&ctx.client.list_leads(&query).await?)
            }
            LeadCommands::Create {
                name,
                phone,
                email,
                course,
                source,
            } => {
                let lead = NewLead {
                    name,
                    phone,
                    email,
                    interested_course: course,
                    source,
                };
                to_output(&ctx.client.create_lead(&lead).await?)
            }
            LeadCommands::Assign { id, to } => to_output(&ctx.client.assign_lead(&id, &to).await?),
            LeadCommands::Distribute {
                leads,
                unassigned,
                members,
            } => {
                ctx.require_manager()?;

                let lead_ids = if unassigned {
                    let query = LeadQuery {
                        unassigned_only: true,
                        ..LeadQuery::default()
                    };
                    ctx.client
                        .list_leads(&query)
                        .await?
                        .into_iter()
                        .filter(|lead| lead.is_unassigned())
                        .map(|lead| lead.id)
                        .collect()
                } else {
                    leads
                };

                let report = distribute_leads(
                    &ctx.client,
                    &ctx.guards.bulk_assign,
                    &lead_ids,
                    &members,
                )
                .await?;
                info!("{}", report.summary_message());

                // Reload the lead list
                let unassigned_remaining = match ctx.client.list_leads(&LeadQuery::default()).await {
                    Ok(leads) => Some(leads.iter().filter(|lead| lead.is_unassigned()).count()),
                    Err(e) => {
                        warn!("Failed to reload leads after distribution: {}", e);
                        None
                    }
                };

                Ok(json!({
                    "message": report.summary_message(),
                    "report": report,
                    "unassignedRemaining": unassigned_remaining,
                }))
            }
            LeadCommands::Status { id, status, note } => {
                let update = LeadStatusUpdate {
                    status: status.parse()?,
                    note,
                };
                to_output(&ctx.client.update_lead_status(&id, &update).await?)
            }
            LeadCommands::Delete { id } => Ok(ctx.client.delete_lead(&id).await?),
            LeadCommands::History { id } => Ok(ctx.client.get_lead_history(&id).await?),
            LeadCommands::Today => Ok(ctx.client.get_today_assignments().await?),
            LeadCommands::Courses => to_output(&ctx.client.list_courses().await?),
        }
    }
}
