use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MailBoxes {
    Inbox,
    Sent,
    Archive,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Email {
    pub id: u64,
    pub sender: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
    pub timestamp: String,
    pub read: bool,
    #[serde(default)]
    pub archived: bool,
}

/// Body of `POST /emails`. Recipients stay the raw comma separated string,
/// the server splits and validates them.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ComposeRequest {
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ReadUpdate {
    pub read: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ServerMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
pub struct LikeStatus {
    pub liked: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EditRequest {
    pub content: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EditResponse {
    pub data: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Post {
    pub id: u64,
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub liked_by_current_user: bool,
    /// Set for posts owned by the current user.
    #[serde(default)]
    pub editable: bool,
}
