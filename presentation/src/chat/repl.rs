//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::Spinner;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;
use tracing::warn;
use veribot_application::{
    NoProgress, ProgressNotifier, SendMessageOutput, SendMessageUseCase, VerificationGateway,
};
use veribot_domain::MessageLog;

/// Number of input lines kept in the history file
const HISTORY_CAPACITY: usize = 1000;

/// Result of handling a slash command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Exit,
}

/// Interactive chat REPL
///
/// Owns the visible message log; every exchange is appended to it.
pub struct ChatRepl {
    use_case: SendMessageUseCase,
    log: MessageLog,
    backend_url: String,
    output: OutputConfig,
    repl: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(gateway: Arc<dyn VerificationGateway>, backend_url: impl Into<String>) -> Self {
        Self {
            use_case: SendMessageUseCase::new(gateway),
            log: MessageLog::new(),
            backend_url: backend_url.into(),
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
        }
    }

    /// Set output settings
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Set REPL settings
    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Messages exchanged so far
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();

        if let Some(path) = &self.repl.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open history file {}: {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("veribot".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        match self.handle_command(line) {
                            CommandResult::Exit => break,
                            CommandResult::Continue => continue,
                        }
                    }

                    self.send(line).await;
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Send one message and print the reply
    pub async fn send(&mut self, text: &str) -> Option<SendMessageOutput> {
        let progress: Box<dyn ProgressNotifier> = if self.repl.show_progress {
            Box::new(Spinner::default())
        } else {
            Box::new(NoProgress)
        };

        let output = self
            .use_case
            .execute(&mut self.log, text, progress.as_ref())
            .await?;

        println!();
        println!("{}", self.render(&output));
        println!();

        Some(output)
    }

    /// Format a send result according to the output settings
    pub fn render(&self, output: &SendMessageOutput) -> String {
        if output.success {
            ConsoleFormatter::format(&output.reply, self.output.format)
        } else {
            ConsoleFormatter::format_error(&output.reply, self.output.format)
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "╭─────────────────────────────────────────────╮".cyan());
        println!("{}", "│          VeriBot - News Verification        │".cyan());
        println!("{}", "╰─────────────────────────────────────────────╯".cyan());
        println!();
        println!("{} {}", "Backend:".bold(), self.backend_url);
        println!();
        println!("Paste a claim or headline to verify it.");
        println!("Type /help for commands.");
        println!();
    }

    /// Handle slash commands
    pub fn handle_command(&self, cmd: &str) -> CommandResult {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                CommandResult::Exit
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?     - Show this help");
                println!("  /history          - Show the conversation so far");
                println!("  /clear            - Clear the screen");
                println!("  /quit, /exit, /q  - Exit chat");
                println!();
                CommandResult::Continue
            }
            "/history" => {
                println!();
                if self.log.is_empty() {
                    println!("{}", "No messages yet.".dimmed());
                } else {
                    println!("{}", ConsoleFormatter::format_history(&self.log));
                }
                println!();
                CommandResult::Continue
            }
            "/clear" => {
                print!("\x1B[2J\x1B[1;1H");
                CommandResult::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandResult::Continue
            }
        }
    }
}
