use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;

use crate::app::setup::load_branding;
use crate::config::ClientConfig;
use caramelchat_api::{ChatTransport, HttpChatClient};
use caramelchat_chat::{ChatSession, Key};
use caramelchat_logging::{get_logs_dir, ConversationLogger};
use caramelchat_models::{FileAttachment, Sender};

/// Run interactive REPL mode
pub async fn run_repl_mode(client_config: ClientConfig) -> Result<()> {
    println!("{}", "🍮 Caramel AI Chat".bright_cyan().bold());

    // Branding is a one-time fetch; failure just means an unbranded banner
    if let Some(branding) = load_branding(&client_config).await {
        println!("{}", branding.organization.bold());
        if !branding.slogan.is_empty() {
            println!("{}", branding.slogan.bright_black());
        }
        println!(
            "{}",
            format!("{} • {}", branding.website, branding.email).bright_black()
        );
    }

    println!(
        "{}",
        format!("Backend: {}", client_config.api_config().base_url()).bright_black()
    );
    println!(
        "{}",
        "Type 'exit' or 'quit' to leave, or '/help' for commands\n".bright_black()
    );

    let client =
        HttpChatClient::new(client_config.api_config()).with_verbose(client_config.verbose);
    let mut session = ChatSession::new(client);
    session.initialize().await;

    if session.is_connected() {
        println!("{}", "🟢 Connected".green());
    } else {
        println!(
            "{}",
            "🔴 Backend unreachable - messages will fail until it comes back".red()
        );
    }

    // Initialize transcript logger
    let mut logger = if client_config.log_enabled {
        match create_logger().await {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    let mut rl = DefaultEditor::new()?;
    let mut rendered = 0usize;
    rendered = render_new_messages(&session, rendered, &mut logger).await;

    loop {
        let attach_indicator = session
            .attached_file()
            .map(|f| format!("[📎 {}] ", f.name))
            .unwrap_or_default();
        let readline = rl.readline(&format!(
            "{}{} ",
            attach_indicator.bright_magenta(),
            "You:".bright_green().bold()
        ));

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                if line == "exit" || line == "quit" {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }

                if line == "/help" {
                    print_help();
                    continue;
                }

                if line == "/clear" {
                    session.clear();
                    rendered = 0;
                    rendered = render_new_messages(&session, rendered, &mut logger).await;
                    continue;
                }

                if line == "/status" {
                    print_status(&session, &client_config);
                    continue;
                }

                if line == "/detach" {
                    if session.attached_file().is_some() {
                        session.detach_file();
                        println!("{} Attachment removed", "📎".bright_black());
                    } else {
                        println!("{} Nothing attached", "ℹ️".bright_blue());
                    }
                    continue;
                }

                if let Some(path) = line.strip_prefix("/attach ") {
                    attach_path(&mut session, Path::new(path.trim()));
                    rendered = render_new_messages(&session, rendered, &mut logger).await;
                    continue;
                }

                // A bare existing-file path on the prompt behaves like a file
                // dropped onto the window
                let dropped = line.trim_matches('\'').trim_matches('"');
                if Path::new(dropped).is_file() {
                    session.set_drag_over(true);
                    attach_path(&mut session, Path::new(dropped));
                    session.set_drag_over(false);
                    rendered = render_new_messages(&session, rendered, &mut logger).await;
                    continue;
                }

                rl.add_history_entry(line)?;

                session.set_pending_input(line);
                session.handle_key(Key::Enter, false).await;
                rendered = render_new_messages(&session, rendered, &mut logger).await;
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    // Graceful shutdown of logger (flush & close)
    if let Some(logger) = &mut logger {
        logger.shutdown().await;
    }

    Ok(())
}

async fn create_logger() -> Result<ConversationLogger> {
    let logs_dir = get_logs_dir()?;
    ConversationLogger::new(&logs_dir).await
}

/// Print and log everything the session appended since the last render.
///
/// User echoes are logged but not re-printed; the typed line is already on
/// screen.
async fn render_new_messages<T: ChatTransport>(
    session: &ChatSession<T>,
    rendered: usize,
    logger: &mut Option<ConversationLogger>,
) -> usize {
    for message in &session.messages()[rendered..] {
        if let Some(logger) = logger {
            logger.log_message(message).await;
        }
        if message.sender == Sender::Bot {
            println!(
                "\n{} {}\n",
                "🤖 Caramel AI:".bright_blue().bold(),
                message.text
            );
        }
    }
    session.messages().len()
}

fn attach_path<T: ChatTransport>(session: &mut ChatSession<T>, path: &Path) {
    match FileAttachment::from_path(path) {
        Ok(file) => {
            let name = file.name.clone();
            let size = file.size;
            session.attach_file(file);
            // attach_file posts a bot message instead of staging on rejection
            if session.attached_file().map(|f| f.name == name).unwrap_or(false) {
                println!(
                    "{} Attached {} ({})",
                    "📎".bright_green(),
                    name.cyan(),
                    format_size(size).bright_black()
                );
            }
        }
        Err(e) => eprintln!("{} {}", "❌".bright_red(), e),
    }
}

fn print_status<T: ChatTransport>(session: &ChatSession<T>, client_config: &ClientConfig) {
    let connectivity = if session.is_connected() {
        "connected".green()
    } else {
        "disconnected".red()
    };
    println!("{} Backend: {} ({})", "🖥️".bright_cyan(), client_config.api_config().base_url(), connectivity);
    println!("  Messages in thread: {}", session.messages().len());
    match session.attached_file() {
        Some(file) => println!("  Attachment: {} ({})", file.name, format_size(file.size)),
        None => println!("  Attachment: none"),
    }
}

fn print_help() {
    println!("{} Commands:", "💡".bright_yellow());
    println!("  /attach <path>          - Stage a file for the next message");
    println!("  /detach                 - Drop the staged file");
    println!("  /clear                  - Reset the conversation");
    println!("  /status                 - Show connectivity and attachment");
    println!("  /help                   - Show this help");
    println!("  exit, quit              - Leave");
    println!("  (a bare file path attaches it, like dropping a file)");
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
