use crate::activity_commands::ActivityCommands;
use crate::admission_commands::{BatchCommands, TargetCommands};
use crate::auth_commands::{AuthCommands, UserCommands};
use crate::error::Result as CliResult;
use crate::fee_commands::FeeCommands;
use crate::hr_commands::{HandoverCommands, IncomeCommands, LeaveCommands, TadaCommands};
use crate::lead_commands::LeadCommands;
use crate::message_commands::{MessageCommands, NotificationCommands};
use crate::session::AppContext;
use crate::task_commands::TaskCommands;

use crate::ClientError;

use acad_core::CoreError;

use clap::Subcommand;
use serde_json::Value;

const PASSWORD_ENV: &str = "ACAD_PASSWORD";

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,

        /// Password (read from ACAD_PASSWORD when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out and remove the stored session
    Logout,

    /// Session operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Staff directory
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Task and Kanban board operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Lead pipeline operations
    Lead {
        #[command(subcommand)]
        action: LeadCommands,
    },

    /// Batch operations
    Batch {
        #[command(subcommand)]
        action: BatchCommands,
    },

    /// Admission fee dues and collection
    Fee {
        #[command(subcommand)]
        action: FeeCommands,
    },

    /// Monthly admission targets and metrics
    Target {
        #[command(subcommand)]
        action: TargetCommands,
    },

    /// Direct messages
    Message {
        #[command(subcommand)]
        action: MessageCommands,
    },

    /// Notifications
    Notification {
        #[command(subcommand)]
        action: NotificationCommands,
    },

    /// Leave applications
    Leave {
        #[command(subcommand)]
        action: LeaveCommands,
    },

    /// TA/DA claims
    Tada {
        #[command(subcommand)]
        action: TadaCommands,
    },

    /// Duty handovers during leave
    Handover {
        #[command(subcommand)]
        action: HandoverCommands,
    },

    /// Recruitment income records
    Income {
        #[command(subcommand)]
        action: IncomeCommands,
    },

    /// Activity log
    Activity {
        #[command(subcommand)]
        action: ActivityCommands,
    },
}

impl Commands {
    /// Whether the command needs a signed-in user
    pub fn requires_session(&self) -> bool {
        !matches!(self, Commands::Login { .. } | Commands::Logout)
    }

    /// Run against the context and return the JSON to print
    pub async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        match self {
            Commands::Login { email, password } => {
                let password = match password {
                    Some(password) => password,
                    None => std::env::var(PASSWORD_ENV).map_err(|_| {
                        ClientError::Invalid {
                            source: CoreError::validation(format!(
                                "pass --password or set {PASSWORD_ENV}"
                            )),
                        }
                    })?,
                };
                let user = ctx.login(&email, &password).await?;
                Ok(serde_json::to_value(user)?)
            }
            Commands::Logout => {
                ctx.logout()?;
                Ok(serde_json::json!({ "signedOut": true }))
            }
            Commands::Auth { action } => action.run(ctx).await,
            Commands::User { action } => action.run(ctx).await,
            Commands::Task { action } => action.run(ctx).await,
            Commands::Lead { action } => action.run(ctx).await,
            Commands::Batch { action } => action.run(ctx).await,
            Commands::Fee { action } => action.run(ctx).await,
            Commands::Target { action } => action.run(ctx).await,
            Commands::Message { action } => action.run(ctx).await,
            Commands::Notification { action } => action.run(ctx).await,
            Commands::Leave { action } => action.run(ctx).await,
            Commands::Tada { action } => action.run(ctx).await,
            Commands::Handover { action } => action.run(ctx).await,
            Commands::Income { action } => action.run(ctx).await,
            Commands::Activity { action } => action.run(ctx).await,
        }
    }
}

/// Serialize a command result for printing
pub(crate) fn to_output<T: serde::Serialize>(value: &T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}
