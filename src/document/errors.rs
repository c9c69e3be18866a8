/// Errors from loading, patching and writing configuration documents.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur anywhere in the config-transform pipeline.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An invocation argument could not be honoured.
    #[error("Invalid value for '{option}': {reason}")]
    Usage {
        /// The offending option, as spelled on the command line.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The baseline document is missing or unreadable.
    #[error("Cannot read baseline '{}': {details}", path.display())]
    NotFound {
        /// Path of the baseline document.
        path: PathBuf,
        /// Underlying I/O error text.
        details: String,
    },

    /// The baseline document is not well-formed YAML.
    #[error("Malformed YAML in '{}': {details}", path.display())]
    Parse {
        /// Path of the baseline document.
        path: PathBuf,
        /// Parser message, including line and column when known.
        details: String,
    },

    /// The document is well-formed but lacks a section the patch overrides.
    #[error("Section '{section}' {reason}")]
    Schema {
        /// Name of the missing or mistyped section.
        section: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Writing the output destination failed.
    #[error("Cannot write to {target}: {details}")]
    Io {
        /// Human-readable destination (`stdout` or a path).
        target: String,
        /// Underlying I/O or serialization error text.
        details: String,
    },
}

impl ConfigError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => 1,
            Self::Usage { .. } => 2,
            Self::NotFound { .. } => 3,
            Self::Parse { .. } => 4,
            Self::Schema { .. } => 5,
        }
    }

    /// Machine-readable error code (snake_case) for the JSON envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "usage_error",
            Self::NotFound { .. } => "not_found",
            Self::Parse { .. } => "parse_error",
            Self::Schema { .. } => "schema_error",
            Self::Io { .. } => "io_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_nonzero_and_distinct() {
        let errors = [
            ConfigError::Io {
                target: "stdout".to_owned(),
                details: "broken pipe".to_owned(),
            },
            ConfigError::Usage {
                option: "--output".to_owned(),
                reason: "no such directory".to_owned(),
            },
            ConfigError::NotFound {
                path: PathBuf::from("sample.yaml"),
                details: "No such file or directory".to_owned(),
            },
            ConfigError::Parse {
                path: PathBuf::from("sample.yaml"),
                details: "did not find expected key".to_owned(),
            },
            ConfigError::Schema {
                section: "general".to_owned(),
                reason: "is missing".to_owned(),
            },
        ];
        let mut codes: Vec<i32> = errors.iter().map(ConfigError::exit_code).collect();
        assert!(codes.iter().all(|c| *c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_schema_message_names_section() {
        let err = ConfigError::Schema {
            section: "general".to_owned(),
            reason: "is missing from the document root".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Section 'general' is missing from the document root"
        );
        assert_eq!(err.code(), "schema_error");
    }
}
