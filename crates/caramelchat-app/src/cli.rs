use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for caramelchat
#[derive(Parser)]
#[command(name = "caramelchat")]
#[command(about = "Caramel AI - terminal chat with document attachments")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Run in interactive mode (default)
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub interactive: bool,

    /// Send a single message and exit
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Attach a file to the one-shot message (requires --message or stands alone)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Pretty-print the JSON output (only useful with --message)
    #[arg(long)]
    pub pretty: bool,

    /// Base URL of the chat backend (e.g. http://localhost:8001)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// URL of the branding descriptor (default: <api-url>/branding.json)
    #[arg(long, value_name = "URL")]
    pub branding_url: Option<String>,

    /// Log HTTP requests and responses to the console
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable the conversation transcript log
    #[arg(long)]
    pub no_log: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    // Helper function to parse CLI args from a string slice
    fn parse_cli_from_args(args: &[&str]) -> Result<Cli, clap::Error> {
        // Simulate command line arguments
        let mut cli_args = vec!["caramelchat"];
        cli_args.extend(args);

        Cli::try_parse_from(cli_args)
    }

    #[test]
    fn test_default_cli_parsing() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse_cli_from_args(&[])?;

        assert!(!cli.interactive);
        assert!(cli.message.is_none());
        assert!(cli.file.is_none());
        assert!(!cli.pretty);
        assert!(cli.api_url.is_none());
        assert!(cli.branding_url.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_log);

        Ok(())
    }

    #[test]
    fn test_interactive_flag() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse_cli_from_args(&["--interactive"])?;

        assert!(cli.interactive);

        Ok(())
    }

    #[test]
    fn test_short_interactive_flag() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse_cli_from_args(&["-i"])?;

        assert!(cli.interactive);

        Ok(())
    }

    #[test]
    fn test_message_argument() -> Result<(), Box<dyn std::error::Error>> {
        let text = "summarize the attached report";
        let cli = parse_cli_from_args(&["--message", text])?;

        assert_eq!(cli.message, Some(text.to_string()));

        Ok(())
    }

    #[test]
    fn test_message_with_file_and_pretty() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse_cli_from_args(&["-m", "hello", "--file", "report.pdf", "--pretty"])?;

        assert_eq!(cli.message, Some("hello".to_string()));
        assert_eq!(cli.file, Some(std::path::PathBuf::from("report.pdf")));
        assert!(cli.pretty);

        Ok(())
    }

    #[test]
    fn test_api_url_flag() -> Result<(), Box<dyn std::error::Error>> {
        let url = "http://localhost:9000";
        let cli = parse_cli_from_args(&["--api-url", url])?;

        assert_eq!(cli.api_url, Some(url.to_string()));

        Ok(())
    }

    #[test]
    fn test_branding_url_flag() -> Result<(), Box<dyn std::error::Error>> {
        let url = "http://cdn.example.com/branding.json";
        let cli = parse_cli_from_args(&["--branding-url", url])?;

        assert_eq!(cli.branding_url, Some(url.to_string()));

        Ok(())
    }

    #[test]
    fn test_verbose_flag_short_and_long() -> Result<(), Box<dyn std::error::Error>> {
        assert!(parse_cli_from_args(&["-v"])?.verbose);
        assert!(parse_cli_from_args(&["--verbose"])?.verbose);

        Ok(())
    }

    #[test]
    fn test_no_log_flag() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse_cli_from_args(&["--no-log"])?;

        assert!(cli.no_log);

        Ok(())
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(parse_cli_from_args(&["--definitely-not-a-flag"]).is_err());
    }
}
