/// Diagnostics: terminal error rendering and `--debug` stage timers.
use std::io::Write;

use crate::types::ErrorOutput;

/// Diagnostic settings shared by the pipeline stages.
pub struct OutputCtx {
    /// When true, errors are written as a JSON envelope.
    pub json: bool,
    /// When true, print stage timing to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI flags.
    #[must_use]
    pub fn new(json: bool, debug: bool) -> Self {
        Self { json, debug }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Print a debug line to stderr when `--debug` is set.
    pub fn debug_line(&self, msg: &dyn std::fmt::Display) {
        if self.debug {
            eprintln!("[debug] {msg}");
        }
    }
}

/// Render the terminal diagnostic for a failed run.
#[must_use]
pub fn render_error(err: &ErrorOutput, json: bool) -> String {
    if json {
        serde_json::to_string_pretty(err).unwrap_or_default()
    } else {
        format!("Error [{}]: {}", err.error.stage, err.error.message)
    }
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "{}", render_error(err, json));
}

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
