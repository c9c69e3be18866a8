/// YAML load/dump for configuration documents.
use std::fs;
use std::io::Write;
use std::path::Path;

use serde_yaml::Value;

use super::errors::ConfigError;

/// An in-memory configuration document. Mappings keep insertion order.
pub type Document = Value;

/// Read and parse the document at `path`.
///
/// # Errors
///
/// - `ConfigError::NotFound` — the file cannot be opened or read
/// - `ConfigError::Parse` — the content is not well-formed YAML
pub fn load(path: &Path) -> Result<Document, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::NotFound {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    parse(&content, path)
}

/// Parse YAML text; `origin` is only used for error context.
///
/// Merge keys (`<<: *anchor`) are resolved, so the document holds the merged
/// mappings rather than literal `<<` entries.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the content is not well-formed YAML,
/// repeats a mapping key, or has a merge key that does not name a mapping.
pub fn parse(content: &str, origin: &Path) -> Result<Document, ConfigError> {
    let parse_error = |e: serde_yaml::Error| ConfigError::Parse {
        path: origin.to_path_buf(),
        details: e.to_string(),
    };
    let mut doc: Document = serde_yaml::from_str(content).map_err(parse_error)?;
    doc.apply_merge().map_err(parse_error)?;
    Ok(doc)
}

/// Render the whole document to YAML text.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the value cannot be represented as YAML.
pub fn to_string(doc: &Document) -> Result<String, ConfigError> {
    serde_yaml::to_string(doc).map_err(|e| ConfigError::Io {
        target: "document".to_owned(),
        details: e.to_string(),
    })
}

/// Serialize `doc` to `out`.
///
/// The document is rendered fully before the first byte is written, so a
/// serialization failure never leaves a partial document behind.
///
/// # Errors
///
/// Returns `ConfigError::Io` on serialization or write failure.
pub fn dump<W: Write>(doc: &Document, out: &mut W, target: &str) -> Result<(), ConfigError> {
    let text = to_string(doc)?;
    let io_err = |e: std::io::Error| ConfigError::Io {
        target: target.to_owned(),
        details: e.to_string(),
    };
    out.write_all(text.as_bytes()).map_err(io_err)?;
    out.flush().map_err(io_err)
}
