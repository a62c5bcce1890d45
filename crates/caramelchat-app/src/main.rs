use anyhow::Result;
use clap::{CommandFactory, Parser};

use caramelchat::{run_oneshot_mode, run_repl_mode, setup_from_cli, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Generate shell completions and exit
    if let Some(shell) = cli.generate {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    // Set up application configuration from CLI
    let app_config = setup_from_cli(&cli)?;

    // One-shot mode if a message (or just a file) was given
    if let Some(message) = cli.message.clone() {
        return run_oneshot_mode(&cli, message, app_config.client_config).await;
    }
    if cli.file.is_some() {
        return run_oneshot_mode(&cli, String::new(), app_config.client_config).await;
    }

    // Interactive REPL is the default
    run_repl_mode(app_config.client_config).await
}
