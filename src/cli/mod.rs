/// CLI layer: argument parsing, output destination, diagnostics.
pub mod args;
pub mod destination;
pub mod output;

pub use args::Cli;
pub use destination::Output;
pub use output::{OutputCtx, write_error};
