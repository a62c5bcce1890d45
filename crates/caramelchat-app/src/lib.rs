//! Caramelchat Application Library
//!
//! CLI parsing, configuration, and the interactive/one-shot front ends.

// Local modules
pub mod app;
pub mod cli;
pub mod config;

// Re-exports from local modules
pub use app::{run_oneshot_mode, run_repl_mode, setup_from_cli, AppConfig};
pub use cli::Cli;
pub use config::ClientConfig;
