//! Configuration management for enlighten

use crate::error::{EnlightenError, Result};
use crate::export::{DEFAULT_CLASS_PREFIX, DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH};
use crate::snapshot::{MalformedPolicy, SnapshotKeys, SnapshotParser};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Export settings
    pub export: ExportConfig,
    /// Snapshot decoding settings
    pub snapshot: SnapshotConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EnlightenError::FileNotFound(path.to_path_buf()));
        }

        tracing::trace!(path = %path.display(), "Loading configuration");
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Load from an explicit path, or from the default location if it exists
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Default configuration file location
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "styde", "enlighten")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".enlighten/config.toml"))
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<()> {
        if self.export.default_format.trim().is_empty() {
            return Err(EnlightenError::Config(
                "export.default_format cannot be empty".to_string(),
            ));
        }

        if self.export.indent_width > MAX_INDENT_WIDTH {
            return Err(EnlightenError::Config(format!(
                "export.indent_width must be at most {}",
                MAX_INDENT_WIDTH
            )));
        }

        // Prefix must form a valid CSS class name
        let prefix = &self.export.html_class_prefix;
        if !prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(EnlightenError::Config(format!(
                "export.html_class_prefix may only contain ASCII letters, digits, '-' and '_': {:?}",
                prefix
            )));
        }

        let keys = &self.snapshot.keys;
        if keys.class_name.is_empty() || keys.function.is_empty() {
            return Err(EnlightenError::Config(
                "snapshot marker keys cannot be empty".to_string(),
            ));
        }
        if keys.class_name == keys.function {
            return Err(EnlightenError::Config(
                "snapshot.keys.class_name and snapshot.keys.function must differ".to_string(),
            ));
        }

        Ok(())
    }
}

/// Export-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when none is requested
    pub default_format: String,
    /// Spaces per indentation level
    pub indent_width: usize,
    /// Prefix of the CSS classes emitted by the HTML format
    pub html_class_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: "plain".to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
            html_class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }
}

/// Snapshot decoding configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// How malformed nodes are handled
    pub policy: MalformedPolicy,
    /// Marker keys in recorded JSON
    pub keys: SnapshotKeys,
}

impl SnapshotConfig {
    /// Build a parser for these settings
    pub fn parser(&self) -> SnapshotParser {
        SnapshotParser::new()
            .with_keys(self.keys.clone())
            .with_policy(self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.export.default_format, "plain");
        assert_eq!(config.export.indent_width, 4);
        assert_eq!(config.snapshot.policy, MalformedPolicy::Permissive);
        assert_eq!(config.snapshot.keys.class_name, "className");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[export]"));
        assert!(toml.contains("[snapshot.keys]"));

        let config2: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.export.indent_width, config2.export.indent_width);
        assert_eq!(config.snapshot.keys, config2.snapshot.keys);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [snapshot]
            policy = "strict"

            [snapshot.keys]
            class_name = "-e-class-"
            "#,
        )
        .unwrap();

        assert_eq!(config.snapshot.policy, MalformedPolicy::Strict);
        assert_eq!(config.snapshot.keys.class_name, "-e-class-");
        assert_eq!(config.snapshot.keys.function, "function");
        assert_eq!(config.export.default_format, "plain");
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[export]\nindent_width = 2\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.export.indent_width, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(EnlightenError::FileNotFound(_))));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[export]\nindent_width = 100\n").unwrap();

        assert!(matches!(Config::load(&path), Err(EnlightenError::Config(_))));
    }

    #[test]
    fn test_validate_class_prefix() {
        let mut config = Config::default();
        config.export.html_class_prefix = "x\" onclick=\"y".to_string();
        assert!(matches!(config.validate(), Err(EnlightenError::Config(_))));

        config.export.html_class_prefix = "doc_x-".to_string();
        assert!(config.validate().is_ok());

        config.export.html_class_prefix = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_marker_collision() {
        let mut config = Config::default();
        config.snapshot.keys.function = "className".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_snapshot_config_parser() {
        let config = SnapshotConfig {
            policy: MalformedPolicy::Strict,
            ..SnapshotConfig::default()
        };
        let result = config.parser().parse_str(r#"{"className": 1}"#);
        assert!(matches!(result, Err(EnlightenError::MalformedSnapshot { .. })));
    }
}
