/// Shared types: the resolved options record and the JSON error envelope.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::pipeline::PipelineError;

/// Default simulated stop time.
pub const DEFAULT_STOP_TIME: &str = "5m";

/// Default baseline document, relative to the working directory.
pub const DEFAULT_INPUT: &str = "sample.yaml";

/// Options resolved from the command line. Built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Duration expression written to `general.stop_time`.
    pub stop_time: String,
    /// Nodes per zone. Accepted and carried, but no field depends on it yet.
    pub nodes_per_zone: u32,
    /// Baseline document to load.
    pub input: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            stop_time: DEFAULT_STOP_TIME.to_owned(),
            nodes_per_zone: 1,
            input: PathBuf::from(DEFAULT_INPUT),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Pipeline stage that failed.
    pub stage: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `PipelineError`.
    #[must_use]
    pub fn from_pipeline_error(err: &PipelineError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.source.code().to_owned(),
                stage: err.stage.to_string(),
                message: err.source.to_string(),
            },
        }
    }
}
