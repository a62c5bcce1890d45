use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message in the thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// Descriptor of a file carried by a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: u64,
}

/// A single entry in the chat thread
///
/// Messages are immutable once created and only ever appended to the
/// session's ordered sequence - never reordered or deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file_info: Option<FileInfo>,
}

impl ChatMessage {
    fn new(text: String, sender: Sender, file_info: Option<FileInfo>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            sender,
            timestamp: Utc::now(),
            file_info,
        }
    }

    /// Build a user-authored message, optionally tagged with file info
    pub fn user(text: impl Into<String>, file_info: Option<FileInfo>) -> Self {
        Self::new(text.into(), Sender::User, file_info)
    }

    /// Build a bot-authored message
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::Bot, None)
    }
}
