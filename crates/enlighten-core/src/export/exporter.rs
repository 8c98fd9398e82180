//! Recursive snapshot exporter

use super::format::CodeResultFormat;
use crate::snapshot::{FunctionSnapshot, Key, ObjectSnapshot, Snapshot};

/// Nesting level of the root value
const ROOT_LEVEL: usize = 1;

/// Renders snapshot values through a [`CodeResultFormat`].
///
/// The nesting level is passed down each recursive call, so one exporter
/// can be shared and reused freely.
pub struct CodeResultExporter<F> {
    format: F,
}

impl<F: CodeResultFormat> CodeResultExporter<F> {
    /// Create an exporter for the given format
    pub fn new(format: F) -> Self {
        Self { format }
    }

    /// Render a snapshot as one formatted block
    pub fn export(&self, snapshot: &Snapshot) -> String {
        let mut content = self.format.indentation(ROOT_LEVEL);
        content.push_str(&self.render(snapshot, ROOT_LEVEL));

        self.format.block(&content)
    }

    fn render(&self, value: &Snapshot, level: usize) -> String {
        let f = &self.format;

        match value {
            Snapshot::Object(object) => self.render_object(object, level),
            Snapshot::Function(function) => self.render_function(function, level),
            Snapshot::Sequence(items) => {
                self.render_array(items.iter().map(|item| (None, item)), level)
            }
            Snapshot::Mapping(entries) => self.render_array(
                entries.iter().map(|(key, item)| (Some(key), item)),
                level,
            ),
            Snapshot::Integer(value) => f.integer(*value),
            Snapshot::Float(value) => f.float(*value),
            Snapshot::String(value) => f.string(value),
            Snapshot::Bool(value) => f.bool(if *value { "true" } else { "false" }),
            Snapshot::Null => f.null(),
            Snapshot::Unrecognized => String::new(),
        }
    }

    fn render_key(&self, key: &Key) -> String {
        match key {
            Key::Int(value) => self.format.integer(*value),
            Key::Str(value) => self.format.string(value),
        }
    }

    fn render_array<'a>(
        &self,
        items: impl Iterator<Item = (Option<&'a Key>, &'a Snapshot)>,
        level: usize,
    ) -> String {
        let f = &self.format;
        let inner = level + 1;

        let mut output = f.symbol("[");
        output.push_str(&f.line());

        for (key, item) in items {
            output.push_str(&f.indentation(inner));
            if let Some(key) = key {
                output.push_str(&self.render_key(key));
                output.push_str(&f.space());
                output.push_str(&f.symbol("=>"));
                output.push_str(&f.space());
            }
            output.push_str(&self.render(item, inner));
            output.push_str(&f.symbol(","));
            output.push_str(&f.line());
        }

        output.push_str(&f.indentation(level));
        output.push_str(&f.symbol("]"));
        output
    }

    fn render_object(&self, object: &ObjectSnapshot, level: usize) -> String {
        let f = &self.format;
        let inner = level + 1;

        let mut output = f.class_name(&object.class_name);
        output.push_str(&f.space());
        output.push_str(&f.symbol("{"));
        output.push_str(&f.line());

        for (property, value) in &object.attributes {
            output.push_str(&f.indentation(inner));
            output.push_str(&f.property_name(property));
            output.push_str(&f.symbol(":"));
            output.push_str(&f.space());
            output.push_str(&self.render(value, inner));
            output.push_str(&f.symbol(","));
            output.push_str(&f.line());
        }

        output.push_str(&f.indentation(level));
        output.push_str(&f.symbol("}"));
        output
    }

    /// Header comment plus a single-line signature, no trailing newline
    fn render_function(&self, function: &FunctionSnapshot, level: usize) -> String {
        let f = &self.format;
        let last = function.parameters.len().saturating_sub(1);

        let mut output = f.symbol("//");
        output.push_str(&f.space());
        output.push_str(&f.symbol(&function.function));
        output.push_str(&f.line());
        output.push_str(&f.indentation(ROOT_LEVEL));
        output.push_str(&f.symbol("function("));

        for (index, parameter) in function.parameters.iter().enumerate() {
            output.push_str(&f.symbol(if parameter.optional { "?" } else { "" }));
            if let Some(type_name) = &parameter.type_name {
                output.push_str(&f.property_name(type_name));
            }
            output.push_str(&f.space());
            output.push_str(&f.property_name("$"));
            output.push_str(&f.symbol(&parameter.parameter));

            if let Some(default) = &parameter.default {
                output.push_str(&f.space());
                output.push_str(&f.symbol("="));
                output.push_str(&f.space());
                output.push_str(&self.render(default, level));
            }

            if index != last {
                output.push_str(&f.symbol(", "));
            }
        }

        output.push_str(&f.symbol(")"));
        if let Some(return_type) = &function.return_type {
            output.push_str(&f.property_name(&format!(": {}", return_type)));
        }
        output.push_str(&f.space());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{HtmlFormat, PlainFormat};
    use crate::snapshot::{ParameterSnapshot, SnapshotParser};
    use pretty_assertions::assert_eq;

    fn plain() -> CodeResultExporter<PlainFormat> {
        CodeResultExporter::new(PlainFormat::with_indent_width(2))
    }

    #[test]
    fn test_export_scalars() {
        let exporter = plain();
        assert_eq!(exporter.export(&Snapshot::Integer(5)), "  5");
        assert_eq!(exporter.export(&Snapshot::Float(0.25)), "  0.25");
        assert_eq!(exporter.export(&Snapshot::from("hi")), "  \"hi\"");
        assert_eq!(exporter.export(&Snapshot::Bool(true)), "  true");
        assert_eq!(exporter.export(&Snapshot::Null), "  null");
    }

    #[test]
    fn test_consecutive_exports_are_independent() {
        let exporter = plain();
        let nested = Snapshot::Sequence(vec![Snapshot::Sequence(vec![Snapshot::Integer(1)])]);

        let first = exporter.export(&Snapshot::Integer(1));
        exporter.export(&nested);
        let second = exporter.export(&Snapshot::Integer(1));
        assert_eq!(first, second);
    }

    #[test]
    fn test_export_sequence() {
        let snapshot = Snapshot::from(vec![
            Snapshot::Integer(1),
            Snapshot::Integer(2),
            Snapshot::Integer(3),
        ]);
        assert_eq!(plain().export(&snapshot), "  [\n    1,\n    2,\n    3,\n  ]");
    }

    #[test]
    fn test_export_empty_sequence() {
        assert_eq!(plain().export(&Snapshot::Sequence(vec![])), "  [\n  ]");
    }

    #[test]
    fn test_contiguous_entries_render_as_sequence() {
        let snapshot = Snapshot::from_entries(vec![
            (Key::Int(0), Snapshot::from("a")),
            (Key::Int(1), Snapshot::from("b")),
        ]);
        let output = plain().export(&snapshot);
        assert_eq!(output, "  [\n    \"a\",\n    \"b\",\n  ]");
        assert!(!output.contains("=>"));
    }

    #[test]
    fn test_sparse_entries_render_as_mapping() {
        let snapshot = Snapshot::from_entries(vec![
            (Key::Int(0), Snapshot::from("a")),
            (Key::Int(2), Snapshot::from("b")),
        ]);
        assert_eq!(
            plain().export(&snapshot),
            "  [\n    0 => \"a\",\n    2 => \"b\",\n  ]"
        );
    }

    #[test]
    fn test_string_keys() {
        let snapshot = Snapshot::from_named([("name", Snapshot::from("Duilio"))]);
        assert_eq!(plain().export(&snapshot), "  [\n    \"name\" => \"Duilio\",\n  ]");
    }

    #[test]
    fn test_export_object() {
        let snapshot = Snapshot::from(
            ObjectSnapshot::new("App\\User")
                .attribute("name", "Duilio")
                .attribute("tags", Snapshot::from(vec![Snapshot::from("admin")])),
        );
        let expected = [
            "  App\\User {",
            "    name: \"Duilio\",",
            "    tags: [",
            "      \"admin\",",
            "    ],",
            "  }",
        ]
        .join("\n");
        assert_eq!(plain().export(&snapshot), expected);
    }

    #[test]
    fn test_export_object_without_attributes() {
        let snapshot = Snapshot::from(ObjectSnapshot::new("Foo"));
        assert_eq!(plain().export(&snapshot), "  Foo {\n  }");
    }

    #[test]
    fn test_export_recorded_object_with_empty_attribute_list() {
        let snapshot = SnapshotParser::new()
            .parse_str(r#"{"className": "App\\Empty", "attributes": []}"#)
            .unwrap();
        assert_eq!(plain().export(&snapshot), "  App\\Empty {\n  }");
    }

    #[test]
    fn test_nested_depth_is_balanced() {
        let deep = Snapshot::from_named([(
            "a",
            Snapshot::from_named([("b", Snapshot::from_named([("c", Snapshot::Integer(1))]))]),
        )]);
        let snapshot = Snapshot::from_named([("deep", deep), ("flat", Snapshot::Integer(2))]);
        let output = plain().export(&snapshot);

        let expected = [
            "  [",
            "    \"deep\" => [",
            "      \"a\" => [",
            "        \"b\" => [",
            "          \"c\" => 1,",
            "        ],",
            "      ],",
            "    ],",
            "    \"flat\" => 2,",
            "  ]",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_export_function() {
        let snapshot = Snapshot::from(
            FunctionSnapshot::new("add")
                .parameter(ParameterSnapshot::new("a").typed("int"))
                .parameter(ParameterSnapshot::new("b").typed("int").optional().with_default(0i64))
                .returns("int"),
        );
        let exporter = CodeResultExporter::new(PlainFormat::with_indent_width(1));
        assert_eq!(
            exporter.export(&snapshot),
            " // add\n function(int $a, ?int $b = 0): int "
        );
    }

    #[test]
    fn test_export_function_without_parameters() {
        let snapshot = Snapshot::from(FunctionSnapshot::new("now"));
        assert_eq!(plain().export(&snapshot), "  // now\n  function() ");
    }

    #[test]
    fn test_empty_return_type_is_omitted() {
        let snapshot = Snapshot::from(FunctionSnapshot::new("f").returns(""));
        assert_eq!(plain().export(&snapshot), "  // f\n  function() ");
    }

    #[test]
    fn test_untyped_parameter_with_composite_default() {
        let snapshot = Snapshot::from(FunctionSnapshot::new("f").parameter(
            ParameterSnapshot::new("items").with_default(Snapshot::Sequence(vec![])),
        ));
        assert_eq!(
            plain().export(&snapshot),
            "  // f\n  function( $items = [\n  ]) "
        );
    }

    #[test]
    fn test_unrecognized_renders_empty() {
        let snapshot = Snapshot::from(vec![Snapshot::Unrecognized]);
        assert_eq!(plain().export(&snapshot), "  [\n    ,\n  ]");
        assert_eq!(plain().export(&Snapshot::Unrecognized), "  ");
    }

    #[test]
    fn test_exporter_accepts_format_reference() {
        let format = HtmlFormat::new();
        let exporter = CodeResultExporter::new(&format);
        let output = exporter.export(&Snapshot::Integer(1));
        assert!(output.starts_with("<pre class=\"enlighten-code\"><code>"));
        assert!(output.contains("<span class=\"enlighten-int\">1</span>"));
    }

    #[test]
    fn test_html_escapes_nested_values() {
        let snapshot = Snapshot::from(ObjectSnapshot::new("Tag<T>").attribute("body", "<script>"));
        let output = CodeResultExporter::new(HtmlFormat::new()).export(&snapshot);
        assert!(!output.contains("<script>"));
        assert!(output.contains("Tag&lt;T&gt;"));
        assert!(output.contains("&lt;script&gt;"));
    }
}
