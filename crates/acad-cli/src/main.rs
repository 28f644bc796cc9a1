//! acad - academy back-office CLI
//!
//! Manage tasks, leads, admissions, fees and HR requests against the
//! back-office REST API. Every command prints JSON on stdout; logs go to
//! stderr or the configured log file.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (token is stored under .acad/)
//! acad login --email me@academy.test --password secret
//!
//! # Show my board, high priority only
//! acad task board --priority high --pretty
//!
//! # Move a card to In Review
//! acad task move <task-id> --over "In Review"
//!
//! # Split leads equally across two counselors
//! acad lead distribute --unassigned --member <id-a> --member <id-b>
//! ```

use acad_cli::cli::Cli;
use acad_cli::error::Result as CliResult;
use acad_cli::logger;
use acad_cli::session::AppContext;

use acad_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let value = match run(cli).await {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let output = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.override_base_url(server);
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let mut ctx = AppContext::new(config)?;
    if cli.command.requires_session() {
        ctx.restore().await?;
    }

    cli.command.run(&mut ctx).await
}
