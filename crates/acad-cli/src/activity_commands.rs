use crate::commands::to_output;
use crate::error::Result as CliResult;
use crate::session::AppContext;

use clap::Subcommand;
use serde_json::Value;

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Recent activity (managers)
    List {
        /// Maximum entries to return
        #[arg(long)]
        limit: Option<u32>,
    },
}

impl ActivityCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_manager()?;

        match self {
            ActivityCommands::List { limit } => {
                to_output(&ctx.client.list_activity_logs(limit).await?)
            }
        }
    }
}
