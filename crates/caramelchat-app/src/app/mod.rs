pub mod oneshot;
pub mod repl;
pub mod setup;

pub use oneshot::run_oneshot_mode;
pub use repl::run_repl_mode;
pub use setup::{setup_from_cli, AppConfig};
