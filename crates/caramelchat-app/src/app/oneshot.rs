use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::config::ClientConfig;
use caramelchat_api::HttpChatClient;
use caramelchat_chat::ChatSession;
use caramelchat_logging::{get_logs_dir, ConversationLogger};
use caramelchat_models::{FileAttachment, Sender};

/// Run in one-shot mode - send a single message (optionally with a file)
/// and print the reply.
///
/// A failed send still exits 0: the failure is rendered as the bot's
/// apology line, same as in the interactive thread.
pub async fn run_oneshot_mode(
    cli: &Cli,
    message_text: String,
    client_config: ClientConfig,
) -> Result<()> {
    let client =
        HttpChatClient::new(client_config.api_config()).with_verbose(client_config.verbose);
    let mut session = ChatSession::new(client);

    if let Some(path) = &cli.file {
        match FileAttachment::from_path(path) {
            Ok(file) => session.attach_file(file),
            Err(e) => {
                eprintln!("{} {}", "❌".bright_red(), e);
                return Ok(());
            }
        }
    }

    session.set_pending_input(message_text);
    session.submit().await;

    // Transcript for one-shot runs too, unless disabled
    if client_config.log_enabled {
        if let Ok(logs_dir) = get_logs_dir() {
            if let Ok(mut logger) = ConversationLogger::new_oneshot(&logs_dir).await {
                for message in session.messages() {
                    logger.log_message(message).await;
                }
                logger.shutdown().await;
            }
        }
    }

    // The reply is the last bot message: the backend's answer, the apology,
    // or a validation rejection when nothing was sendable
    let reply = session
        .messages()
        .iter()
        .rev()
        .find(|m| m.sender == Sender::Bot)
        .map(|m| m.text.clone())
        .unwrap_or_default();

    if cli.pretty {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "response": reply,
                "connected": session.is_connected(),
            }))
            .unwrap_or_else(|_| reply.clone())
        );
    } else {
        println!("{}", reply);
    }

    Ok(())
}
