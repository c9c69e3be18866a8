/// Pipeline driver: resolve → load → patch → write, in that fixed order.
use std::fmt;

use thiserror::Error;

use crate::cli::{Output, OutputCtx};
use crate::document::{self, ConfigError};
use crate::types::Options;

/// A pipeline stage, used to attribute failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Turning the invocation into options and an output destination.
    Resolve,
    /// Reading and parsing the baseline document.
    Load,
    /// Overriding fields in the loaded document.
    Patch,
    /// Serializing the document to the destination.
    Write,
}

impl Stage {
    /// Stage name as shown in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resolve => "resolve",
            Self::Load => "load",
            Self::Patch => "patch",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure in one pipeline stage. Every failure ends the run.
#[derive(Debug, Error)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    /// The stage that failed.
    pub stage: Stage,
    /// What went wrong.
    pub source: ConfigError,
}

impl PipelineError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.source.exit_code()
    }
}

trait AtStage<T> {
    fn at(self, stage: Stage) -> Result<T, PipelineError>;
}

impl<T> AtStage<T> for Result<T, ConfigError> {
    fn at(self, stage: Stage) -> Result<T, PipelineError> {
        self.map_err(|source| PipelineError { stage, source })
    }
}

/// Acquire the output destination named on the command line.
///
/// # Errors
///
/// Returns a `resolve`-stage `PipelineError` if the destination cannot be
/// opened for writing.
pub fn resolve_output(target: &str, ctx: &OutputCtx) -> Result<Output, PipelineError> {
    let _t = ctx.timer("resolve");
    Output::open(target).at(Stage::Resolve)
}

/// Load the baseline, patch it, and write it to `output`.
///
/// `output` is consumed: on success it is flushed and committed, on any
/// failure it is dropped and the destination is left as it was.
///
/// # Errors
///
/// Returns `PipelineError` naming the first stage that failed.
pub fn run(opts: &Options, output: Output, ctx: &OutputCtx) -> Result<(), PipelineError> {
    ctx.debug_line(&format_args!(
        "stop_time={} nodes_per_zone={} input={} output={}",
        opts.stop_time,
        opts.nodes_per_zone,
        opts.input.display(),
        output.describe()
    ));

    let t_load = ctx.timer("load");
    let mut doc = document::load(&opts.input).at(Stage::Load)?;
    drop(t_load);

    let t_patch = ctx.timer("patch");
    document::patch(&mut doc, opts).at(Stage::Patch)?;
    drop(t_patch);

    let _t_write = ctx.timer("write");
    output.write_document(&doc).at(Stage::Write)
}
