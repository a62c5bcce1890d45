// Logging module - conversation transcripts and request debugging
pub mod conversation_logger;
pub mod request_logger;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use conversation_logger::ConversationLogger;
pub use request_logger::{log_request, log_response};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = if max_chars >= 3 { max_chars - 3 } else { 0 };
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the base caramelchat directory (~/.caramelchat)
pub fn get_caramelchat_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let caramelchat_dir = PathBuf::from(home_dir).join(".caramelchat");

    // Create directory if it doesn't exist
    if !caramelchat_dir.exists() {
        std::fs::create_dir_all(&caramelchat_dir)
            .context("Failed to create caramelchat directory")?;
    }

    Ok(caramelchat_dir)
}

/// Get or create the logs directory (~/.caramelchat/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_caramelchat_dir()?.join("logs");

    // Create directory if it doesn't exist
    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir).context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_truncate_short_string_unchanged() {
        assert_eq!(safe_truncate("hello", 10), "hello");
    }

    #[test]
    fn test_safe_truncate_long_string_gets_ellipsis() {
        assert_eq!(safe_truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_safe_truncate_multibyte_safe() {
        // Must count characters, not bytes
        let s = "héllo wörld";
        let out = safe_truncate(s, 8);
        assert_eq!(out, "héllo...");
    }
}
