//! CLI entrypoint for VeriBot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use veribot_application::{NoProgress, ProgressNotifier, SendMessageUseCase};
use veribot_domain::{MessageLog, MessageText};
use veribot_infrastructure::{ConfigLoader, HttpVerificationGateway, Severity};
use veribot_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputConfig, ReplConfig, Spinner};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(url) = &cli.backend_url {
        config.backend.url = url.clone();
    }

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => bail!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: ConfigLoader::history_path(&config),
    };

    // === Dependency Injection ===
    let gateway = Arc::new(HttpVerificationGateway::new(&config.backend.url)?);
    info!("Starting VeriBot against {}", gateway.endpoint());

    // Chat mode
    if cli.wants_chat() {
        let mut repl = ChatRepl::new(gateway, config.backend.url.clone())
            .with_output(output)
            .with_repl_config(repl_config);

        if let Some(message) = &cli.message {
            repl.send(message).await;
        }

        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single message mode
    let Some(raw) = cli.message else {
        bail!("Message is required. Use --chat for interactive mode.");
    };
    let message = MessageText::parse(&raw)?;

    let use_case = SendMessageUseCase::new(gateway);
    let progress: Box<dyn ProgressNotifier> = if repl_config.show_progress {
        Box::new(Spinner::default())
    } else {
        Box::new(NoProgress)
    };

    let mut log = MessageLog::new();
    let Some(result) = use_case
        .execute(&mut log, message.as_str(), progress.as_ref())
        .await
    else {
        bail!("Message cannot be empty");
    };

    if result.success {
        println!("{}", ConsoleFormatter::format(&result.reply, output.format));
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{}",
            ConsoleFormatter::format_error(&result.reply, output.format)
        );
        Ok(ExitCode::FAILURE)
    }
}
