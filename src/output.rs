// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;
use std::time::Instant;

use crate::deploy::{DeploymentRecord, DeploymentStatus};

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Report a freshly submitted deployment.
    pub fn submitted(&self, record: &DeploymentRecord) {
        match self.mode {
            OutputMode::Normal => println!(
                "Deploying {} ({}) to {}: {}",
                record.repository,
                record.branch,
                record.platform.display_name(),
                record.id
            ),
            OutputMode::Quiet => {}
            OutputMode::Json => self.emit("submitted", None, Some(record)),
        }
    }

    /// Report a deployment that reached a terminal state.
    pub fn finished(&self, record: &DeploymentRecord) {
        let message = record.message.as_deref().unwrap_or_default();
        match (self.mode, record.status) {
            (OutputMode::Json, DeploymentStatus::Success) => {
                self.emit("success", Some(message), Some(record))
            }
            (OutputMode::Json, _) => self.emit("error", Some(message), Some(record)),
            (_, DeploymentStatus::Success) => {
                let url = record.url.as_deref().unwrap_or_default();
                if self.mode == OutputMode::Quiet {
                    println!("{url}");
                } else {
                    println!("{message}: {url} ({:.1}s)", self.elapsed_secs());
                }
            }
            // Failures reach the user through `error`.
            (_, _) => {}
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => println!("{message}"),
            OutputMode::Json => self.emit("success", Some(message), None),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message: Some(message),
                    duration_secs: self.duration(),
                    deployment: None,
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    fn emit(&self, event: &str, message: Option<&str>, deployment: Option<&DeploymentRecord>) {
        let event = JsonEvent {
            event,
            message,
            duration_secs: self.duration(),
            deployment,
        };
        if let Ok(json) = serde_json::to_string(&event) {
            println!("{json}");
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deployment: Option<&'a DeploymentRecord>,
}
