//! Player configuration
//!
//! The orchestrator hands every sink a generic key/value configuration
//! source at init time. This module provides that mapping plus a small
//! `key=value` file loader for the replay binary.

use crate::errors::{PlayerError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Generic string-to-string configuration mapping handed to sinks
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    values: HashMap<String, String>,
}

impl PlayerConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file of `key=value` lines
    ///
    /// Blank lines and lines starting with `#` are ignored. Whitespace
    /// around keys and values is trimmed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config = Self::new();
        for (lineno, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(PlayerError::config(format!(
                    "{}:{}: expected key=value, got {:?}",
                    path.display(),
                    lineno + 1,
                    line
                )));
            };
            config.set(key.trim(), value.trim());
        }
        info!(
            "Loaded {} configuration entries from {}",
            config.values.len(),
            path.display()
        );
        Ok(config)
    }

    /// Set a configuration value, replacing any previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a configuration value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a value that must be present and non-blank
    ///
    /// Returns the trimmed value, or a configuration error naming the key
    /// when it is absent or blank after trimming.
    pub fn get_required(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(value) if !value.trim().is_empty() => Ok(value.trim()),
            _ => Err(PlayerError::config(format!(
                "expected configuration property '{key}' to be present and non-blank"
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PlayerConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.set(key, value);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PlayerError;
    use std::io::Write;

    #[test]
    fn get_required_returns_trimmed_value() {
        let config = PlayerConfig::from_iter([("a.key", "  value  ")]);
        assert_eq!(config.get_required("a.key").unwrap(), "value");
    }

    #[test]
    fn get_required_rejects_missing_key() {
        let config = PlayerConfig::new();
        let err = config.get_required("a.key").unwrap_err();
        assert!(matches!(err, PlayerError::Configuration { .. }));
    }

    #[test]
    fn get_required_rejects_blank_value() {
        let config = PlayerConfig::from_iter([("a.key", "   ")]);
        let err = config.get_required("a.key").unwrap_err();
        assert!(matches!(err, PlayerError::Configuration { .. }));
    }

    #[test]
    fn from_file_parses_entries_and_skips_comments() {
        let path = std::env::temp_dir().join(format!(
            "esplay-config-test-{}.properties",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# player configuration").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "simpleEsSink.esBaseUrl = http://es:9200").unwrap();
        writeln!(file, "simpleEsSink.indexName=logs").unwrap();
        drop(file);

        let config = PlayerConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            config.get("simpleEsSink.esBaseUrl"),
            Some("http://es:9200")
        );
        assert_eq!(config.get("simpleEsSink.indexName"), Some("logs"));
    }

    #[test]
    fn from_file_rejects_malformed_lines() {
        let path = std::env::temp_dir().join(format!(
            "esplay-config-bad-test-{}.properties",
            std::process::id()
        ));
        std::fs::write(&path, "not a key value pair\n").unwrap();
        let result = PlayerConfig::from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result.unwrap_err(),
            PlayerError::Configuration { .. }
        ));
    }
}
