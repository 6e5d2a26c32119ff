//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use veribot_domain::OutputFormat;

/// Output format for bot replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// Labeled report sections
    Sections,
    /// Reply text exactly as received
    Raw,
    /// JSON with the parsed sections
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Sections => OutputFormat::Sections,
            CliOutputFormat::Raw => OutputFormat::Raw,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for veribot
#[derive(Parser, Debug)]
#[command(name = "veribot")]
#[command(author, version, about = "Chat with the VeriBot news verification service")]
#[command(long_about = r#"
VeriBot checks claims and news snippets against a remote verification backend
and shows the reply as a report: summary, truthfulness, justification and
sources used.

With a MESSAGE argument the message is sent once and the reply printed.
Without one, an interactive chat session starts.

Configuration files are loaded from (in priority order):
1. VERIBOT_* environment variables (e.g. VERIBOT_BACKEND__URL)
2. --config <path>     Explicit config file
3. ./veribot.toml      Project-level config
4. ~/.config/veribot/config.toml   Global config

Example:
  veribot "The Great Wall of China is visible from space"
  veribot --backend-url https://veribot.example.com --output json "..."
  veribot --chat
"#)]
pub struct Cli {
    /// Message to verify (omit to start chat mode)
    pub message: Option<String>,

    /// Start interactive chat mode (after sending MESSAGE, if given)
    #[arg(short, long)]
    pub chat: bool,

    /// Base URL of the verification backend
    #[arg(short = 'u', long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<CliOutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether the interactive REPL should run
    pub fn wants_chat(&self) -> bool {
        self.chat || self.message.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_message_means_one_shot() {
        let cli = Cli::parse_from(["veribot", "the moon is cheese"]);
        assert_eq!(cli.message.as_deref(), Some("the moon is cheese"));
        assert!(!cli.wants_chat());
    }

    #[test]
    fn test_no_message_means_chat() {
        let cli = Cli::parse_from(["veribot"]);
        assert!(cli.wants_chat());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "veribot",
            "-vv",
            "-u",
            "https://veribot.example.com",
            "--output",
            "json",
            "--chat",
            "claim",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.backend_url.as_deref(), Some("https://veribot.example.com"));
        assert_eq!(cli.output.map(OutputFormat::from), Some(OutputFormat::Json));
        assert!(cli.wants_chat());
    }
}
