//! enlighten-core - Core library for enlighten
//!
//! This crate renders values recorded during test runs (scalars, arrays,
//! objects and callable signatures) as formatted code examples for
//! generated documentation. It provides the snapshot model and decoder,
//! the format strategies, the recursive exporter and configuration.

pub mod config;
pub mod error;
pub mod export;
pub mod snapshot;

pub use error::{EnlightenError, Result};
