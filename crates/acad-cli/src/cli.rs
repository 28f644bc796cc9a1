use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "acad")]
#[command(about = "Academy back-office CLI: tasks, leads, admissions, fees and HR")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides the configured development/production URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
