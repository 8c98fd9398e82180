//! Registry of named output formats

use super::exporter::CodeResultExporter;
use super::format::CodeResultFormat;
use super::html::HtmlFormat;
use super::plain::PlainFormat;
use crate::config::ExportConfig;
use crate::error::{EnlightenError, Result};
use crate::snapshot::Snapshot;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Manager for handling multiple output formats
pub struct ExportManager {
    formats: HashMap<String, Box<dyn CodeResultFormat>>,
}

impl ExportManager {
    /// Create a new export manager with the default formats
    pub fn new() -> Self {
        Self::from_config(&ExportConfig::default())
    }

    /// Create a manager whose built-in formats follow the export configuration
    pub fn from_config(config: &ExportConfig) -> Self {
        let mut manager = Self {
            formats: HashMap::new(),
        };

        manager.register(Box::new(PlainFormat::with_indent_width(config.indent_width)));
        manager.register(Box::new(
            HtmlFormat::new()
                .with_indent_width(config.indent_width)
                .with_class_prefix(config.html_class_prefix.clone()),
        ));

        manager
    }

    /// Register a format, replacing any format with the same name
    pub fn register(&mut self, format: Box<dyn CodeResultFormat>) {
        tracing::debug!(format = format.format_name(), "Registering export format");
        self.formats.insert(format.format_name().to_string(), format);
    }

    /// Render a snapshot with the named format
    pub fn export(&self, snapshot: &Snapshot, format: &str) -> Result<String> {
        let format = self.lookup(format)?;
        tracing::debug!(format = format.format_name(), "Exporting snapshot");

        Ok(CodeResultExporter::new(format).export(snapshot))
    }

    /// Render a snapshot to a file, returning the path actually written
    pub fn export_to_file(
        &self,
        snapshot: &Snapshot,
        format: &str,
        path: &Path,
    ) -> Result<PathBuf> {
        let content = self.export(snapshot, format)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Add extension if needed
        let final_path = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(self.lookup(format)?.file_extension())
        };

        // Atomic write using temp file
        let temp_path = final_path.with_extension("tmp");
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;
        }

        fs::rename(&temp_path, &final_path)?;
        Ok(final_path)
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.formats.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.formats.contains_key(format)
    }

    /// Get a format by name
    pub fn get(&self, format: &str) -> Option<&dyn CodeResultFormat> {
        self.formats.get(format).map(|f| f.as_ref())
    }

    fn lookup(&self, format: &str) -> Result<&dyn CodeResultFormat> {
        self.get(format)
            .ok_or_else(|| EnlightenError::UnknownFormat(format.to_string()))
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct ShoutFormat;

    impl CodeResultFormat for ShoutFormat {
        fn format_name(&self) -> &str {
            "shout"
        }

        fn file_extension(&self) -> &str {
            "txt"
        }

        fn symbol(&self, symbol: &str) -> String {
            symbol.to_string()
        }

        fn space(&self) -> String {
            " ".to_string()
        }

        fn line(&self) -> String {
            "\n".to_string()
        }

        fn indentation(&self, _level: usize) -> String {
            String::new()
        }

        fn integer(&self, value: i64) -> String {
            value.to_string()
        }

        fn float(&self, value: f64) -> String {
            value.to_string()
        }

        fn string(&self, value: &str) -> String {
            value.to_uppercase()
        }

        fn bool(&self, value: &str) -> String {
            value.to_uppercase()
        }

        fn null(&self) -> String {
            "NULL".to_string()
        }

        fn class_name(&self, class_name: &str) -> String {
            class_name.to_uppercase()
        }

        fn property_name(&self, property: &str) -> String {
            property.to_uppercase()
        }

        fn block(&self, content: &str) -> String {
            format!("<<{}>>", content)
        }
    }

    #[test]
    fn test_export_manager_creation() {
        let manager = ExportManager::new();
        assert!(manager.has_format("plain"));
        assert!(manager.has_format("html"));
        assert_eq!(manager.available_formats(), vec!["html", "plain"]);
    }

    #[test]
    fn test_register_format() {
        let mut manager = ExportManager::new();
        manager.register(Box::new(ShoutFormat));
        assert!(manager.has_format("shout"));

        let output = manager.export(&Snapshot::from("quiet"), "shout").unwrap();
        assert_eq!(output, "<<QUIET>>");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut manager = ExportManager::new();
        manager.register(Box::new(PlainFormat::with_indent_width(1)));
        let output = manager.export(&Snapshot::Integer(3), "plain").unwrap();
        assert_eq!(output, " 3");
    }

    #[test]
    fn test_export_unknown_format() {
        let manager = ExportManager::new();
        let result = manager.export(&Snapshot::Null, "pdf");
        assert!(matches!(result, Err(EnlightenError::UnknownFormat(_))));
    }

    #[test]
    fn test_from_config() {
        let config = ExportConfig {
            indent_width: 2,
            html_class_prefix: "x-".to_string(),
            ..ExportConfig::default()
        };
        let manager = ExportManager::from_config(&config);

        assert_eq!(manager.export(&Snapshot::Null, "plain").unwrap(), "  null");
        let html = manager.export(&Snapshot::Null, "html").unwrap();
        assert!(html.contains("class=\"x-null\""));
    }

    #[test]
    fn test_export_to_file_adds_extension() {
        let dir = TempDir::new().unwrap();
        let manager = ExportManager::new();
        let snapshot = Snapshot::from(vec![Snapshot::Integer(1)]);

        let path = manager
            .export_to_file(&snapshot, "html", &dir.path().join("nested/result"))
            .unwrap();
        assert_eq!(path, dir.path().join("nested/result.html"));

        let written = fs::read_to_string(path).unwrap();
        assert!(written.starts_with("<pre"));
        assert!(!dir.path().join("nested/result.tmp").exists());
    }

    #[test]
    fn test_export_to_file_keeps_extension() {
        let dir = TempDir::new().unwrap();
        let manager = ExportManager::new();
        let path = dir.path().join("out.log");

        let written = manager.export_to_file(&Snapshot::Bool(false), "plain", &path).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(path).unwrap(), "    false");
    }
}
