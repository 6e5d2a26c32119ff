//! Spinner shown while a verification request is in flight

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use veribot_application::ProgressNotifier;

/// Shows an animated spinner between request start and completion
pub struct Spinner {
    message: String,
    bar: Mutex<Option<ProgressBar>>,
}

impl Spinner {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Whether the spinner is currently displayed
    pub fn is_active(&self) -> bool {
        self.bar.lock().map(|bar| bar.is_some()).unwrap_or(false)
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::with_message("Verifying...")
    }
}

impl ProgressNotifier for Spinner {
    fn on_request_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(self.message.dimmed().to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock()
            && let Some(previous) = bar.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_request_complete(&self, _success: bool) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let spinner = Spinner::with_message("Checking");
        assert!(!spinner.is_active());

        spinner.on_request_start();
        assert!(spinner.is_active());

        spinner.on_request_complete(true);
        assert!(!spinner.is_active());
    }

    #[test]
    fn test_complete_without_start_is_noop() {
        let spinner = Spinner::default();
        spinner.on_request_complete(false);
        assert!(!spinner.is_active());
    }
}
