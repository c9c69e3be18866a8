#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! shadowgen — generate a ready-to-run Shadow simulation config.

mod cli;
mod document;
mod pipeline;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use pipeline::{PipelineError, Stage};
use types::ErrorOutput;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let err = PipelineError {
                stage: Stage::Resolve,
                source: cli::args::usage_error(&err),
            };
            write_error(
                &ErrorOutput::from_pipeline_error(&err),
                cli::args::wants_json(std::env::args_os()),
            );
            std::process::exit(err.exit_code());
        }
    };
    let ctx = OutputCtx::new(cli.json, cli.debug);
    let opts = cli.options();

    // `run` consumes the output, so it is released before `exit`.
    let result = pipeline::resolve_output(&cli.output, &ctx)
        .and_then(|output| pipeline::run(&opts, output, &ctx));

    if let Err(err) = result {
        let error_output = ErrorOutput::from_pipeline_error(&err);
        write_error(&error_output, ctx.json);
        std::process::exit(err.exit_code());
    }
}
