//! HTML format

use super::format::{quote, CodeResultFormat};
use super::plain::{DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH};

/// Default prefix for CSS classes
pub const DEFAULT_CLASS_PREFIX: &str = "enlighten-";

/// HTML output: every fragment escaped and wrapped in a classed `<span>`
#[derive(Debug, Clone)]
pub struct HtmlFormat {
    class_prefix: String,
    indent_width: usize,
}

impl HtmlFormat {
    /// Create an HTML format with the default class prefix
    pub fn new() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = html_escape::encode_quoted_attribute(&prefix.into()).into_owned();
        self
    }

    /// Set the number of spaces per indentation level
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.min(MAX_INDENT_WIDTH);
        self
    }

    fn span(&self, kind: &str, text: &str) -> String {
        format!(
            "<span class=\"{}{}\">{}</span>",
            self.class_prefix,
            kind,
            html_escape::encode_quoted_attribute(text)
        )
    }
}

impl Default for HtmlFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeResultFormat for HtmlFormat {
    fn format_name(&self) -> &str {
        "html"
    }

    fn file_extension(&self) -> &str {
        "html"
    }

    fn symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            return String::new();
        }
        self.span("symbol", symbol)
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
        self.span("int", &value.to_string())
    }

    fn float(&self, value: f64) -> String {
        self.span("float", &value.to_string())
    }

    fn string(&self, value: &str) -> String {
        self.span("string", &quote(value))
    }

    fn bool(&self, value: &str) -> String {
        self.span("bool", value)
    }

    fn null(&self) -> String {
        self.span("null", "null")
    }

    fn class_name(&self, class_name: &str) -> String {
        self.span("class", class_name)
    }

    fn property_name(&self, property: &str) -> String {
        self.span("property", property)
    }

    fn block(&self, content: &str) -> String {
        format!("<pre class=\"{}code\"><code>{}</code></pre>", self.class_prefix, content)
    }
}
