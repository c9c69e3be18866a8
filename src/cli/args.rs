/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;
use clap::error::{ContextKind, ContextValue};

use crate::document::ConfigError;
use crate::types::{DEFAULT_INPUT, DEFAULT_STOP_TIME, Options};

/// shadowgen — generate a Shadow simulation config from a baseline document.
#[derive(Debug, Parser)]
#[command(
    name = "shadowgen",
    about = "Generate a ready-to-run Shadow simulation config from a baseline document",
    version
)]
pub struct Cli {
    /// Simulated stop time written to `general.stop_time` (e.g. 5m, 1h, 300s).
    #[arg(long = "stop_time", value_name = "DURATION", default_value = DEFAULT_STOP_TIME)]
    pub stop_time: String,

    /// Nodes per zone.
    #[arg(long = "nodes_per_zone", value_name = "N", default_value_t = 1)]
    pub nodes_per_zone: u32,

    /// Output file, or "-" for stdout. An existing file is replaced.
    #[arg(short, long, value_name = "PATH", default_value = "-")]
    pub output: String,

    /// Baseline document to load.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Print errors as a JSON envelope on stderr.
    #[arg(long)]
    pub json: bool,

    /// Print per-stage timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Build the options record consumed by the pipeline.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            stop_time: self.stop_time.clone(),
            nodes_per_zone: self.nodes_per_zone,
            input: self.input.clone(),
        }
    }
}

/// Convert a clap parse failure into a usage error naming the offending option.
#[must_use]
pub fn usage_error(err: &clap::Error) -> ConfigError {
    let option = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        _ => "arguments".to_owned(),
    };
    let rendered = err.to_string();
    let reason = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_owned();
    ConfigError::Usage { option, reason }
}

/// Whether `--json` appears among raw arguments that failed to parse.
#[must_use]
pub fn wants_json<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString>,
{
    args.into_iter().any(|a| {
        let arg: std::ffi::OsString = a.into();
        arg == "--json"
    })
}
