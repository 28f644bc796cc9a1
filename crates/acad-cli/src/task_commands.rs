use crate::commands::to_output;
use crate::error::Result as CliResult;
use crate::kanban::KanbanBoard;
use crate::session::AppContext;
use crate::{BoardScope, ClientResult};

use acad_core::{
    ChecklistDraft, MoveDecision, TaskAssignment, TaskFilter, TaskPriority, TaskTag, TaskUpdate,
    tasks_report,
};

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use log::info;
use serde_json::{Value, json};

/// Board filters; every flag given must match
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Title substring (case-insensitive)
    #[arg(long)]
    search: Option<String>,

    /// Priority: low, medium, high, critical
    #[arg(long)]
    priority: Option<String>,

    /// Tag name
    #[arg(long)]
    tag: Option<String>,

    /// Assigner user ID
    #[arg(long)]
    assigned_by: Option<String>,

    /// Assignee user ID
    #[arg(long)]
    assigned_to: Option<String>,

    /// Server status
    #[arg(long)]
    status: Option<String>,
}

impl FilterArgs {
    fn into_filter(self) -> CliResult<TaskFilter> {
        Ok(TaskFilter {
            search: self.search,
            priority: self
                .priority
                .as_deref()
                .map(str::parse::<TaskPriority>)
                .transpose()?,
            tag: self.tag.as_deref().map(str::parse::<TaskTag>).transpose()?,
            assigned_by: self.assigned_by,
            assigned_to: self.assigned_to,
            status: self.status,
        })
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Show the Kanban board grouped by column
    Board {
        /// Every task instead of only mine (managers)
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List tasks
    List {
        /// Every task instead of only mine (managers)
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Get a task by ID
    Get {
        id: String,
    },

    /// Create a task and assign it
    Assign {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// Assignee user ID (repeatable)
        #[arg(long = "to", required = true)]
        assigned_to: Vec<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,

        /// Priority: low, medium, high, critical (default: medium)
        #[arg(long)]
        priority: Option<String>,

        /// Tag (repeatable)
        #[arg(long)]
        tag: Vec<String>,

        /// Checklist item text (repeatable)
        #[arg(long)]
        checklist: Vec<String>,
    },

    /// Update task fields
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },

    /// Move a card on the board
    Move {
        id: String,

        /// Column name or the ID of a card in the target column; omit to
        /// simulate a drop outside the board
        #[arg(long)]
        over: Option<String>,

        /// Resolve against the full board (managers)
        #[arg(long)]
        all: bool,
    },

    /// Comment on a task
    Comment {
        id: String,

        #[arg(long)]
        text: String,

        /// Mentioned user ID (repeatable)
        #[arg(long)]
        mention: Vec<String>,
    },

    /// Tick a checklist item
    Check {
        task_id: String,

        item_id: String,

        /// Untick instead
        #[arg(long)]
        undo: bool,
    },

    /// Delete a task
    Delete {
        id: String,
    },

    /// Export the filtered task list as CSV
    Export {
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        filter: FilterArgs,

        /// Destination file
        #[arg(long, short)]
        output: PathBuf,
    },
}

impl TaskCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_user()?;

        match self {
            TaskCommands::Board { all, filter } => {
                let board = KanbanBoard::load(ctx.client.clone(), board_scope(ctx, all)?).await?;
                let filter = filter.into_filter()?;
                to_output(&board.lanes(&filter))
            }
            TaskCommands::List { all, filter } => {
                let tasks = ctx.client.list_tasks(board_scope(ctx, all)?).await?;
                let filter = filter.into_filter()?;
                to_output(&filter.apply(&tasks))
            }
            TaskCommands::Get { id } => to_output(&ctx.client.get_task(&id).await?),
            TaskCommands::Assign {
                title,
                description,
                assigned_to,
                due,
                priority,
                tag,
                checklist,
            } => {
                let assignment = TaskAssignment {
                    title,
                    description,
                    assigned_to,
                    due_date: due,
                    priority: priority
                        .as_deref()
                        .map(str::parse::<TaskPriority>)
                        .transpose()?
                        .unwrap_or_default(),
                    tags: tag
                        .iter()
                        .map(|t| t.parse::<TaskTag>())
                        .collect::<Result<_, _>>()?,
                    checklist: checklist
                        .into_iter()
                        .map(|text| ChecklistDraft { text })
                        .collect(),
                };

                let _permit = ctx.guards.task_assign.try_acquire()?;
                to_output(&ctx.client.assign_task(&assignment).await?)
            }
            TaskCommands::Update {
                id,
                title,
                description,
                status,
                priority,
                due,
            } => {
                let update = TaskUpdate {
                    title,
                    description,
                    status,
                    priority: priority
                        .as_deref()
                        .map(str::parse::<TaskPriority>)
                        .transpose()?,
                    due_date: due,
                    tags: None,
                };
                to_output(&ctx.client.update_task(&id, &update).await?)
            }
            TaskCommands::Move { id, over, all } => {
                let mut board =
                    KanbanBoard::load(ctx.client.clone(), board_scope(ctx, all)?).await?;
                let decision = board.move_task(&id, over.as_deref()).await?;
                Ok(match decision {
                    MoveDecision::Move(update) => json!({
                        "result": "moved",
                        "taskId": id,
                        "boardColumn": update.board_column,
                        "boardPosition": update.board_position,
                    }),
                    MoveDecision::SameColumn => json!({ "result": "unchanged", "taskId": id }),
                    MoveDecision::NoTarget => json!({ "result": "noTarget", "taskId": id }),
                })
            }
            TaskCommands::Comment { id, text, mention } => {
                to_output(&ctx.client.add_task_comment(&id, &text, &mention).await?)
            }
            TaskCommands::Check {
                task_id,
                item_id,
                undo,
            } => to_output(
                &ctx.client
                    .update_checklist_item(&task_id, &item_id, !undo)
                    .await?,
            ),
            TaskCommands::Delete { id } => Ok(ctx.client.delete_task(&id).await?),
            TaskCommands::Export {
                all,
                filter,
                output,
            } => {
                let tasks = ctx.client.list_tasks(board_scope(ctx, all)?).await?;
                let filter = filter.into_filter()?;
                let report = tasks_report(filter.apply(&tasks));
                std::fs::write(&output, report.render())?;
                info!("Wrote {} tasks to {}", report.row_count(), output.display());
                Ok(json!({ "path": output, "rows": report.row_count() }))
            }
        }
    }
}

/// The all-tasks board is for managers only
fn board_scope(ctx: &AppContext, all: bool) -> ClientResult<BoardScope> {
    if all {
        ctx.require_manager()?;
        Ok(BoardScope::All)
    } else {
        Ok(BoardScope::Mine)
    }
}
