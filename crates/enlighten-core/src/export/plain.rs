//! Plain text format

use super::format::{quote, CodeResultFormat};

/// Default number of spaces per indentation level
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Largest accepted indentation width; wider requests are clamped
pub const MAX_INDENT_WIDTH: usize = 16;

/// Plain text output: values unchanged, strings quoted, no styling
#[derive(Debug, Clone)]
pub struct PlainFormat {
    indent_unit: String,
}

impl PlainFormat {
    /// Create a plain format with the default indentation width
    pub fn new() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }

    /// Create a plain format indenting each level by `width` spaces
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent_unit: " ".repeat(width.min(MAX_INDENT_WIDTH)),
        }
    }

    /// Create a plain format with a custom indentation unit (e.g. a tab)
    pub fn with_indent_unit(unit: impl Into<String>) -> Self {
        Self {
            indent_unit: unit.into(),
        }
    }
}

impl Default for PlainFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeResultFormat for PlainFormat {
    fn format_name(&self) -> &str {
        "plain"
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

    fn indentation(&self, level: usize) -> String {
        self.indent_unit.repeat(level)
    }

    fn integer(&self, value: i64) -> String {
        value.to_string()
    }

    fn float(&self, value: f64) -> String {
        value.to_string()
    }

    fn string(&self, value: &str) -> String {
        quote(value)
    }

    fn bool(&self, value: &str) -> String {
        value.to_string()
    }

    fn null(&self) -> String {
        "null".to_string()
    }

    fn class_name(&self, class_name: &str) -> String {
        class_name.to_string()
    }

    fn property_name(&self, property: &str) -> String {
        property.to_string()
    }

    fn block(&self, content: &str) -> String {
        content.to_string()
    }
}
