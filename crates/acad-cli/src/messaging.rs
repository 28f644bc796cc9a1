use crate::Client;
use crate::poller::{PollHandle, Poller};

use acad_core::{Conversation, Message};

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use log::warn;
use tokio::sync::Mutex;

/// Messages of one thread, deduplicated by id across polls
#[derive(Debug, Default)]
pub struct MessageFeed {
    seen: HashSet<String>,
    messages: Vec<Message>,
}

impl MessageFeed {
    /// Merge a fetched batch and return the messages not seen before
    pub fn merge(&mut self, batch: Vec<Message>) -> Vec<Message> {
        let fresh: Vec<Message> = batch
            .into_iter()
            .filter(|message| self.seen.insert(message.id.clone()))
            .collect();
        self.messages.extend(fresh.iter().cloned());
        fresh
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Poll the thread with `peer_id`, reporting new messages and marking the
/// peer's unread ones as read
pub fn watch_thread<F>(client: Client, peer_id: String, period: Duration, on_new: F) -> PollHandle
where
    F: Fn(&[Message]) + Send + Sync + 'static,
{
    let feed = Arc::new(Mutex::new(MessageFeed::default()));
    let on_new = Arc::new(on_new);

    Poller::spawn("messages", period, move || {
        let client = client.clone();
        let peer_id = peer_id.clone();
        let feed = Arc::clone(&feed);
        let on_new = Arc::clone(&on_new);

        async move {
            let batch = match client.get_messages(&peer_id).await {
                Ok(batch) => batch,
                Err(e) => {
                    warn!("Failed to fetch messages with {}: {}", peer_id, e);
                    return;
                }
            };

            let fresh = feed.lock().await.merge(batch);
            if fresh.is_empty() {
                return;
            }
            on_new(&fresh);

            let has_unread = fresh
                .iter()
                .any(|message| !message.read && message.sender.id == peer_id);
            if has_unread && let Err(e) = client.mark_messages_as_read(&peer_id).await {
                warn!("Failed to mark messages from {} as read: {}", peer_id, e);
            }
        }
    })
}

/// Poll the conversation list
pub fn watch_conversations<F>(client: Client, period: Duration, on_update: F) -> PollHandle
where
    F: Fn(&[Conversation]) + Send + Sync + 'static,
{
    let on_update = Arc::new(on_update);

    Poller::spawn("conversations", period, move || {
        let client = client.clone();
        let on_update = Arc::clone(&on_update);

        async move {
            match client.get_conversations().await {
                Ok(conversations) => on_update(&conversations),
                Err(e) => warn!("Failed to fetch conversations: {}", e),
            }
        }
    })
}
