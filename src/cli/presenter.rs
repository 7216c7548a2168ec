//! CLI presenter for output formatting

use colored::*;

use crate::domain::call::CallEvent;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a call event to stdout
    pub fn event(&self, event: &CallEvent) {
        println!("{} {}", "●".cyan(), self.format_event(event));
    }

    /// Format a call event as `name [number] [(Ns)]`
    pub fn format_event(&self, event: &CallEvent) -> String {
        let mut line = event.name().bold().to_string();
        if let Some(number) = event.number() {
            line.push(' ');
            line.push_str(number);
        }
        if let Some(end) = event.end() {
            let secs = (end - event.start()).num_seconds().max(0);
            line.push_str(&format!(" ({}s)", secs).dimmed().to_string());
        }
        line
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
