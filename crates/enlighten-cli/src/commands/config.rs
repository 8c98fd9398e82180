//! Config command
//!
//! Inspect and create enlighten configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::PathBuf;

use enlighten_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Destination (defaults to the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the default configuration path
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config, json),
        ConfigCommand::Init { path, force } => init_config(path, force),
        ConfigCommand::Path => {
            println!("{}", Config::default_path().display());
            Ok(())
        }
    }
}

fn show_config(config: &Config, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", config.to_toml_string()?);
    }

    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    use colored::Colorize;

    let config_path = path.unwrap_or_else(Config::default_path);

    if config_path.exists() && !force {
        eprintln!(
            "{} {} already exists. Use {} to overwrite.",
            "⚠".yellow(),
            config_path.display(),
            "--force".cyan()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create {}", parent.display()))?;
        }
    }

    let content = Config::default().to_toml_string()?;
    fs::write(&config_path, content)
        .context(format!("Failed to write {}", config_path.display()))?;

    eprintln!("{} Created {}", "✓".green(), config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");

        init_config(Some(path.clone()), false).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.export.default_format, "plain");
    }

    #[test]
    fn test_init_does_not_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# custom\n").unwrap();

        init_config(Some(path.clone()), false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# custom\n");

        init_config(Some(path.clone()), true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[export]"));
    }
}
