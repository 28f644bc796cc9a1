use crate::commands::to_output;
use crate::error::Result as CliResult;
use crate::session::AppContext;

use clap::Subcommand;
use serde_json::Value;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Show the signed-in user
    Whoami,
}

impl AuthCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        match self {
            AuthCommands::Whoami => to_output(ctx.require_user()?),
        }
    }
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all staff
    List,

    /// List staff who can receive leads
    Admission,
}

impl UserCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_user()?;
        match self {
            UserCommands::List => to_output(&ctx.client.list_users().await?),
            UserCommands::Admission => to_output(&ctx.client.list_admission_users().await?),
        }
    }
}
