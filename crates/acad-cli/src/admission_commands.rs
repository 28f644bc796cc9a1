use crate::commands::to_output;
use crate::error::Result as CliResult;
use crate::session::AppContext;

use acad_core::{AdmissionTargetForm, BatchForm, admission_metrics_report, json_rows_report};

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, Utc};
use clap::Subcommand;
use log::info;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum BatchCommands {
    /// List batches
    List,

    /// Create a batch
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        course: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        #[arg(long)]
        capacity: Option<u32>,
    },

    /// Update a batch
    Update {
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        course: Option<String>,

        #[arg(long)]
        start: Option<NaiveDate>,

        #[arg(long)]
        end: Option<NaiveDate>,

        #[arg(long)]
        capacity: Option<u32>,
    },

    /// Delete a batch
    Delete {
        id: String,
    },

    /// Enrollment report for a batch
    Report {
        id: String,

        /// Write the student rows as CSV
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl BatchCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_user()?;

        match self {
            BatchCommands::List => to_output(&ctx.client.list_batches().await?),
            BatchCommands::Create {
                name,
                course,
                start,
                end,
                capacity,
            } => {
                let form = BatchForm {
                    name,
                    course,
                    start_date: start,
                    end_date: end,
                    capacity,
                };
                to_output(&ctx.client.create_batch(&form).await?)
            }
            BatchCommands::Update {
                id,
                name,
                course,
                start,
                end,
                capacity,
            } => {
                let form = BatchForm {
                    name,
                    course,
                    start_date: start,
                    end_date: end,
                    capacity,
                };
                to_output(&ctx.client.update_batch(&id, &form).await?)
            }
            BatchCommands::Delete { id } => Ok(ctx.client.delete_batch(&id).await?),
            BatchCommands::Report { id, output } => {
                let report = ctx.client.get_batch_report(&id).await?;
                let Some(output) = output else {
                    return Ok(report);
                };

                let rows = report
                    .get("students")
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default();
                let csv = json_rows_report(&format!("Batch {id}"), &rows);
                std::fs::write(&output, csv.render())?;
                info!("Wrote batch report to {}", output.display());
                Ok(json!({ "path": output, "rows": csv.row_count() }))
            }
        }
    }
}

#[derive(Subcommand)]
pub enum TargetCommands {
    /// Targets for a month
    List {
        #[arg(long)]
        month: Option<u32>,

        #[arg(long)]
        year: Option<i32>,
    },

    /// Set a member's monthly admission target
    Set {
        /// Member user ID
        #[arg(long)]
        user: String,

        #[arg(long)]
        month: u32,

        #[arg(long)]
        year: i32,

        #[arg(long)]
        target: u32,
    },

    /// Delete a target
    Delete {
        id: String,
    },

    /// Pipeline counts against targets
    Metrics {
        /// Month (default: current)
        #[arg(long)]
        month: Option<u32>,

        /// Year (default: current)
        #[arg(long)]
        year: Option<i32>,

        /// Write the metrics as CSV
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl TargetCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_manager()?;

        match self {
            TargetCommands::List { month, year } => {
                to_output(&ctx.client.get_admission_targets(month, year).await?)
            }
            TargetCommands::Set {
                user,
                month,
                year,
                target,
            } => {
                let form = AdmissionTargetForm {
                    user_id: user,
                    month,
                    year,
                    target,
                };
                to_output(&ctx.client.set_admission_target(&form).await?)
            }
            TargetCommands::Delete { id } => Ok(ctx.client.delete_admission_target(&id).await?),
            TargetCommands::Metrics {
                month,
                year,
                output,
            } => {
                let now = Utc::now();
                let month = month.unwrap_or_else(|| now.month());
                let year = year.unwrap_or_else(|| now.year());
                let metrics = ctx
                    .client
                    .get_admission_metrics(Some(month), Some(year))
                    .await?;

                let Some(output) = output else {
                    return to_output(&metrics);
                };

                let period = format!("{year}-{month:02}");
                let csv = admission_metrics_report(&metrics, &period, now);
                std::fs::write(&output, csv.render())?;
                info!("Wrote admission metrics to {}", output.display());
                Ok(json!({ "path": output, "rows": csv.row_count() }))
            }
        }
    }
}
