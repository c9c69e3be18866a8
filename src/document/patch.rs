/// Apply resolved options to a loaded document.
use serde_yaml::Value;

use super::codec::Document;
use super::errors::ConfigError;
use crate::types::Options;

/// Section that holds simulator-wide settings.
pub const GENERAL: &str = "general";

/// Key under [`GENERAL`] overridden by `--stop_time`.
pub const STOP_TIME: &str = "stop_time";

/// Override `general.stop_time` with `opts.stop_time`.
///
/// Nothing else in the document is touched. An existing `stop_time` keeps its
/// position in the mapping; a missing one is appended to `general`.
///
/// # Errors
///
/// Returns `ConfigError::Schema` if the document root is not a mapping, or if
/// `general` is missing or not a mapping. The section is never auto-created.
pub fn patch(doc: &mut Document, opts: &Options) -> Result<(), ConfigError> {
    let root = doc.as_mapping_mut().ok_or_else(|| schema("document root is not a mapping"))?;

    let general = root
        .get_mut(GENERAL)
        .ok_or_else(|| schema("is missing from the document root"))?
        .as_mapping_mut()
        .ok_or_else(|| schema("is not a mapping"))?;

    general.insert(
        Value::String(STOP_TIME.to_owned()),
        Value::String(opts.stop_time.clone()),
    );
    Ok(())
}

fn schema(reason: &str) -> ConfigError {
    ConfigError::Schema {
        section: GENERAL.to_owned(),
        reason: reason.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::document::codec::parse;

    fn opts(stop_time: &str) -> Options {
        Options {
            stop_time: stop_time.to_owned(),
            ..Options::default()
        }
    }

    fn doc(text: &str) -> Document {
        parse(text, Path::new("test")).unwrap()
    }

    #[test]
    fn test_overrides_stop_time_only() {
        let mut d = doc(
            "general:\n  stop_time: 1h\n  seed: 7\nhosts:\n  node01:\n    network_node_id: 4\n    ip_addr: 11.0.0.5\n",
        );
        let before = d.clone();
        patch(&mut d, &opts("10m")).unwrap();

        assert_eq!(d["general"]["stop_time"].as_str(), Some("10m"));
        assert_eq!(d["general"]["seed"], before["general"]["seed"]);
        assert_eq!(d["hosts"], before["hosts"]);
    }

    #[test]
    fn test_keeps_key_position() {
        let mut d = doc("general:\n  seed: 7\n  stop_time: 1h\n  parallelism: 4\n");
        patch(&mut d, &opts("10m")).unwrap();
        let keys: Vec<&str> = d["general"]
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, ["seed", "stop_time", "parallelism"]);
    }

    #[test]
    fn test_appends_missing_stop_time() {
        let mut d = doc("general:\n  seed: 7\n");
        patch(&mut d, &Options::default()).unwrap();
        assert_eq!(d["general"]["stop_time"].as_str(), Some("5m"));
    }

    #[test]
    fn test_numeric_looking_duration_stays_string() {
        let mut d = doc("general:\n  stop_time: 1h\n");
        patch(&mut d, &opts("600")).unwrap();
        assert_eq!(d["general"]["stop_time"], Value::String("600".to_owned()));
    }

    #[test]
    fn test_missing_general_is_schema_error() {
        let mut d = doc("hosts: {}\n");
        let err = patch(&mut d, &Options::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Schema { ref section, .. } if section == "general"));
        assert!(d.as_mapping().unwrap().get(GENERAL).is_none());
    }

    #[test]
    fn test_general_not_mapping_is_schema_error() {
        let mut d = doc("general: 5m\n");
        assert!(matches!(
            patch(&mut d, &Options::default()),
            Err(ConfigError::Schema { .. })
        ));
    }

    #[test]
    fn test_non_mapping_root_is_schema_error() {
        let mut d = doc("- general\n- hosts\n");
        assert!(matches!(
            patch(&mut d, &Options::default()),
            Err(ConfigError::Schema { .. })
        ));
    }
}
