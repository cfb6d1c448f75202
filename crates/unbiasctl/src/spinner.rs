//! Terminal spinner shown while a one-shot command waits on a service

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::time::Duration;

/// Spinner update interval
const SPINNER_INTERVAL_MS: u64 = 120;

/// Spinner on stderr; silent when stderr is not a terminal
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn new(message: &str, enabled: bool) -> Self {
        if !enabled || !io::stderr().is_terminal() {
            return Self { bar: None };
        }

        let style = ProgressStyle::with_template("{spinner:.cyan} {msg:.dim} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]);

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_INTERVAL_MS));

        Self { bar: Some(bar) }
    }

    /// Stop and erase the spinner line
    pub fn stop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}
