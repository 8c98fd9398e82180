//! Rendering of snapshot values
//!
//! This module turns recorded [`Snapshot`](crate::snapshot::Snapshot)
//! values into formatted code examples.
//!
//! # Overview
//!
//! - [`CodeResultExporter`] walks the snapshot and decides layout
//! - [`CodeResultFormat`] supplies the primitive fragments (symbols,
//!   indentation, styled literals)
//! - [`PlainFormat`] and [`HtmlFormat`] are the built-in formats
//! - [`ExportManager`] keeps formats by name
//!
//! # Example
//!
//! ```
//! use enlighten_core::export::{CodeResultExporter, PlainFormat};
//! use enlighten_core::snapshot::Snapshot;
//!
//! let exporter = CodeResultExporter::new(PlainFormat::new());
//! let output = exporter.export(&Snapshot::from(vec![Snapshot::Integer(1)]));
//! assert_eq!(output, "    [\n        1,\n    ]");
//! ```

mod exporter;
mod format;
mod html;
mod manager;
mod plain;

pub use exporter::CodeResultExporter;
pub use format::{quote, CodeResultFormat};
pub use html::{HtmlFormat, DEFAULT_CLASS_PREFIX};
pub use manager::ExportManager;
pub use plain::{PlainFormat, DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH};
