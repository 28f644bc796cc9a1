use crate::{Client, ClientResult};

use acad_core::{Conversation, Message, Notification};

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

impl Client {
    // =========================================================================
    // Direct Messages
    // =========================================================================

    /// Conversation list with last message and unread counts
    pub async fn get_conversations(&self) -> ClientResult<Vec<Conversation>> {
        let req = self.request(Method::GET, "/messages/conversations");
        self.execute_as(req, "conversations").await
    }

    /// Messages exchanged with another user, oldest first
    pub async fn get_messages(&self, user_id: &str) -> ClientResult<Vec<Message>> {
        let req = self.request(Method::GET, &format!("/messages/{}", user_id));
        self.execute_as(req, "messages").await
    }

    /// Send a direct message
    pub async fn send_message(&self, receiver_id: &str, content: &str) -> ClientResult<Message> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct SendMessageRequest<'a> {
            receiver_id: &'a str,
            content: &'a str,
        }

        let req = self
            .request(Method::POST, "/messages")
            .json(&SendMessageRequest {
                receiver_id,
                content,
            });
        self.execute_as(req, "message").await
    }

    /// Mark every message from a user as read
    pub async fn mark_messages_as_read(&self, user_id: &str) -> ClientResult<Value> {
        let req = self.request(Method::PATCH, &format!("/messages/{}/read", user_id));
        self.execute(req).await
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    pub async fn get_notifications(&self) -> ClientResult<Vec<Notification>> {
        let req = self.request(Method::GET, "/notifications");
        self.execute_as(req, "notifications").await
    }

    pub async fn mark_notification_read(&self, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::PATCH, &format!("/notifications/{}/read", id));
        self.execute(req).await
    }

    pub async fn mark_all_notifications_read(&self) -> ClientResult<Value> {
        let req = self.request(Method::PATCH, "/notifications/read-all");
        self.execute(req).await
    }

    pub async fn delete_notification(&self, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/notifications/{}", id));
        self.execute(req).await
    }
}
