//! Export command
//!
//! Render a recorded snapshot with one of the available formats.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::ansi::AnsiFormat;
use enlighten_core::config::Config;
use enlighten_core::export::ExportManager;
use enlighten_core::snapshot::MalformedPolicy;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Plain,
    /// HTML markup with CSS classes
    Html,
    /// Terminal colors
    Ansi,
}

impl OutputFormat {
    fn name(self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Html => "html",
            OutputFormat::Ansi => "ansi",
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Snapshot JSON file (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Output format (defaults to export.default_format)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Fail on malformed snapshots instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Spaces per indentation level
    #[arg(long)]
    pub indent: Option<usize>,
}

/// Execute the export command
pub fn execute(args: ExportArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let mut config = config.clone();
    if let Some(indent) = args.indent {
        config.export.indent_width = indent;
    }
    if args.strict {
        config.snapshot.policy = MalformedPolicy::Strict;
    }
    config.validate().context("Invalid export options")?;
    let Config {
        export: export_config,
        snapshot: snapshot_config,
    } = config;

    let json = read_input(args.input.as_deref())?;
    let snapshot = snapshot_config
        .parser()
        .parse_str(&json)
        .context("Failed to decode snapshot")?;

    let mut manager = ExportManager::from_config(&export_config);
    manager.register(Box::new(AnsiFormat::with_indent_width(
        export_config.indent_width,
    )));

    let format_name = match args.format {
        Some(format) => format.name(),
        None => export_config.default_format.as_str(),
    };
    tracing::info!(format = format_name, "Rendering snapshot");

    if let Some(output_path) = args.output {
        let written = manager
            .export_to_file(&snapshot, format_name, &output_path)
            .context(format!("Failed to write to {}", output_path.display()))?;
        eprintln!("{} Exported to {}", "✓".green(), written.display());
    } else {
        let output = manager.export(&snapshot, format_name)?;
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{}", output).context("Failed to write to stdout")?;
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
