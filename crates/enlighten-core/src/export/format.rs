//! Format strategy trait

/// Primitive rendering operations used by the exporter.
///
/// Each method returns a fragment that the exporter concatenates without
/// further interpretation, so implementations decide the flavour of the
/// output (plain text, terminal colours, HTML markup) while traversal
/// stays the same.
pub trait CodeResultFormat: Send + Sync {
    /// Name the format is registered under
    fn format_name(&self) -> &str;

    /// File extension used when writing to disk
    fn file_extension(&self) -> &str;

    /// Punctuation and other literal code text
    fn symbol(&self, symbol: &str) -> String;

    fn space(&self) -> String;

    fn line(&self) -> String;

    /// Indentation for the given nesting level (1 at the top)
    fn indentation(&self, level: usize) -> String;

    fn integer(&self, value: i64) -> String;

    fn float(&self, value: f64) -> String;

    fn string(&self, value: &str) -> String;

    /// Boolean literal, already spelled `true` or `false`
    fn bool(&self, value: &str) -> String;

    fn null(&self) -> String;

    fn class_name(&self, class_name: &str) -> String;

    fn property_name(&self, property: &str) -> String;

    /// Wrap the complete rendering
    fn block(&self, content: &str) -> String;
}

impl<T: CodeResultFormat + ?Sized> CodeResultFormat for &T {
    fn format_name(&self) -> &str {
        (**self).format_name()
    }

    fn file_extension(&self) -> &str {
        (**self).file_extension()
    }

    fn symbol(&self, symbol: &str) -> String {
        (**self).symbol(symbol)
    }

    fn space(&self) -> String {
        (**self).space()
    }

    fn line(&self) -> String {
        (**self).line()
    }

    fn indentation(&self, level: usize) -> String {
        (**self).indentation(level)
    }

    fn integer(&self, value: i64) -> String {
        (**self).integer(value)
    }

    fn float(&self, value: f64) -> String {
        (**self).float(value)
    }

    fn string(&self, value: &str) -> String {
        (**self).string(value)
    }

    fn bool(&self, value: &str) -> String {
        (**self).bool(value)
    }

    fn null(&self) -> String {
        (**self).null()
    }

    fn class_name(&self, class_name: &str) -> String {
        (**self).class_name(class_name)
    }

    fn property_name(&self, property: &str) -> String {
        (**self).property_name(property)
    }

    fn block(&self, content: &str) -> String {
        (**self).block(content)
    }
}

/// Quote a string literal, escaping quotes, backslashes and control characters
pub fn quote(value: &str) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote() {
        assert_eq!(quote("abc"), "\"abc\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\nb"), "\"a\\nb\"");
        assert_eq!(quote("ñandú"), "\"ñandú\"");
    }
}
