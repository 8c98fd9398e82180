//! enlighten - render recorded test snapshots as code examples
//!
//! ## Quick Start
//!
//! ```bash
//! # Render a recorded snapshot as plain text
//! enlighten export snapshot.json
//!
//! # Render as HTML into a file
//! enlighten export snapshot.json --format html --output docs/result
//!
//! # Read from stdin, fail on malformed snapshots
//! cat snapshot.json | enlighten export --strict
//! ```

mod ansi;
mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
