use crate::commands::to_output;
use crate::error::Result as CliResult;
use crate::messaging::{watch_conversations, watch_thread};
use crate::session::AppContext;

use clap::Subcommand;
use log::info;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum MessageCommands {
    /// Conversations with unread counts
    Conversations,

    /// Messages exchanged with a user
    Show {
        user_id: String,
    },

    /// Send a message
    Send {
        user_id: String,

        content: String,
    },

    /// Mark a user's messages as read
    Read {
        user_id: String,
    },

    /// Follow a thread (or the conversation list) until Ctrl-C
    Watch {
        /// Thread to follow; omit to follow the conversation list
        user_id: Option<String>,
    },
}

impl MessageCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_user()?;

        match self {
            MessageCommands::Conversations => to_output(&ctx.client.get_conversations().await?),
            MessageCommands::Show { user_id } => {
                to_output(&ctx.client.get_messages(&user_id).await?)
            }
            MessageCommands::Send { user_id, content } => {
                to_output(&ctx.client.send_message(&user_id, &content).await?)
            }
            MessageCommands::Read { user_id } => {
                Ok(ctx.client.mark_messages_as_read(&user_id).await?)
            }
            MessageCommands::Watch { user_id } => {
                let polling = &ctx.config.polling;
                let handle = match user_id {
                    Some(user_id) => watch_thread(
                        ctx.client.clone(),
                        user_id,
                        polling.messages_interval(),
                        |messages| {
                            for message in messages {
                                print_line(&json!(message));
                            }
                        },
                    ),
                    None => watch_conversations(
                        ctx.client.clone(),
                        polling.conversations_interval(),
                        |conversations| print_line(&json!(conversations)),
                    ),
                };

                info!("Watching {} (Ctrl-C to stop)", handle.name());
                tokio::signal::ctrl_c().await?;
                handle.cancel().await;

                Ok(json!({ "stopped": true }))
            }
        }
    }
}

/// One JSON document per line while watching
fn print_line(value: &Value) {
    println!("{value}");
}

#[derive(Subcommand)]
pub enum NotificationCommands {
    /// List notifications
    List,

    /// Mark one notification as read
    Read {
        id: String,
    },

    /// Mark every notification as read
    ReadAll,

    /// Delete a notification
    Delete {
        id: String,
    },
}

impl NotificationCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_user()?;

        match self {
            NotificationCommands::List => to_output(&ctx.client.get_notifications().await?),
            NotificationCommands::Read { id } => {
                Ok(ctx.client.mark_notification_read(&id).await?)
            }
            NotificationCommands::ReadAll => Ok(ctx.client.mark_all_notifications_read().await?),
            NotificationCommands::Delete { id } => Ok(ctx.client.delete_notification(&id).await?),
        }
    }
}
