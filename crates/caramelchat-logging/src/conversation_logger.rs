use anyhow::Result;
use caramelchat_models::{ChatMessage, FileInfo};
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

#[derive(Serialize)]
struct LogEntry {
    timestamp: String, // ISO-8601 Local time
    sender: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<FileInfo>,
}

/// Append-only JSONL transcript of a chat session
///
/// Write failures never interrupt the session; they degrade to a stderr
/// notice.
pub struct ConversationLogger {
    file_path: PathBuf,
    file: Option<tokio::fs::File>,
}

impl ConversationLogger {
    /// Create a new logger; generates the file name based on the current local time.
    pub async fn new(logs_dir: &Path) -> Result<Self> {
        Self::create(logs_dir, "").await
    }

    /// Create a new logger for one-shot mode; file name carries a "-oneshot" suffix.
    pub async fn new_oneshot(logs_dir: &Path) -> Result<Self> {
        Self::create(logs_dir, "-oneshot").await
    }

    async fn create(logs_dir: &Path, suffix: &str) -> Result<Self> {
        fs::create_dir_all(logs_dir).await?;

        let now_local = Local::now();
        let filename = format!("cchat-{}{}.jsonl", now_local.format("%Y-%m-%d-%H%M%S"), suffix);
        let file_path = logs_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;
        Ok(Self {
            file_path,
            file: Some(file),
        })
    }

    /// Append one thread message as a log entry.
    pub async fn log_message(&mut self, message: &ChatMessage) {
        self.log(
            message.sender.as_str(),
            &message.text,
            message.file_info.clone(),
        )
        .await;
    }

    /// Append a single log entry.
    pub async fn log(&mut self, sender: &str, content: &str, file: Option<FileInfo>) {
        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            sender: sender.to_string(),
            content: content.to_string(),
            file,
        };
        if let Some(file) = &mut self.file {
            if let Ok(json) = serde_json::to_string(&entry) {
                // Write the JSON line
                if let Err(e) = file.write_all(json.as_bytes()).await {
                    eprintln!("[Logging error] {}", e);
                } else if let Err(e) = file.write_all(b"\n").await {
                    eprintln!("[Logging error] {}", e);
                } else {
                    let _ = file.flush().await;
                }
            }
        }
    }

    /// Path of the transcript file backing this logger.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Flush and close the underlying file.
    pub async fn shutdown(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caramelchat_models::ChatMessage;

    #[tokio::test]
    async fn test_logger_writes_jsonl_lines() {
        let dir = std::env::temp_dir().join(format!("cchat-logtest-{}", std::process::id()));
        let mut logger = ConversationLogger::new(&dir).await.unwrap();

        logger.log_message(&ChatMessage::user("hello", None)).await;
        logger.log_message(&ChatMessage::bot("hi")).await;
        let path = logger.path().to_path_buf();
        logger.shutdown().await;

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["sender"], "user");
        assert_eq!(first["content"], "hello");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
