/// Document layer: YAML codec, stop-time patch, error taxonomy.
pub mod codec;
pub mod errors;
pub mod patch;

pub use codec::{Document, dump, load};
pub use errors::ConfigError;
pub use patch::patch;
