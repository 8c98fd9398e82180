//! Terminal colour format

use colored::Colorize;
use enlighten_core::export::{quote, CodeResultFormat, DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH};

/// Plain layout with terminal colours for names and literals
#[derive(Debug, Clone)]
pub struct AnsiFormat {
    indent_width: usize,
}

impl AnsiFormat {
    pub fn new() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }

    pub fn with_indent_width(indent_width: usize) -> Self {
        Self {
            indent_width: indent_width.min(MAX_INDENT_WIDTH),
        }
    }
}

impl Default for AnsiFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeResultFormat for AnsiFormat {
    fn format_name(&self) -> &str {
        "ansi"
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
        " ".repeat(level.saturating_mul(self.indent_width))
    }

    fn integer(&self, value: i64) -> String {
        value.to_string().magenta().to_string()
    }

    fn float(&self, value: f64) -> String {
        value.to_string().magenta().to_string()
    }

    fn string(&self, value: &str) -> String {
        quote(value).green().to_string()
    }

    fn bool(&self, value: &str) -> String {
        value.blue().to_string()
    }

    fn null(&self) -> String {
        "null".blue().to_string()
    }

    fn class_name(&self, class_name: &str) -> String {
        class_name.yellow().bold().to_string()
    }

    fn property_name(&self, property: &str) -> String {
        property.cyan().to_string()
    }

    fn block(&self, content: &str) -> String {
        content.to_string()
    }
}
