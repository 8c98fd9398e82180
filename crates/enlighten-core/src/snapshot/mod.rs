//! Recorded snapshot values
//!
//! A snapshot is a runtime value captured while a test ran: a scalar,
//! a list, a keyed map, an object (class name plus attributes) or a
//! callable signature. Recorded JSON is decoded once, at this boundary,
//! into the closed [`Snapshot`] enum so rendering never has to inspect
//! raw shapes.
//!
//! # Example
//!
//! ```
//! use enlighten_core::snapshot::{Snapshot, SnapshotParser};
//!
//! let parser = SnapshotParser::new();
//! let snapshot = parser.parse_str(r#"{"0": "a", "1": "b"}"#).unwrap();
//! assert!(matches!(snapshot, Snapshot::Sequence(_)));
//! ```

mod model;
mod parser;

pub use model::{FunctionSnapshot, Key, ObjectSnapshot, ParameterSnapshot, Snapshot};
pub use parser::{MalformedPolicy, SnapshotKeys, SnapshotParser};
