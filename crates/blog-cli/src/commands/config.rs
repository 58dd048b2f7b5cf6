//! Config command
//!
//! Inspect and create blogstore configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::{Path, PathBuf};

use blog_core::Config;

use super::{load_config, resolve_config_path, LOCAL_CONFIG};

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
        /// Target file (defaults to ./.blogstore.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file in effect
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, explicit: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(explicit, json),
        ConfigCommand::Init { path, force } => init_config(path, force),
        ConfigCommand::Path => show_path(explicit),
    }
}

fn show_config(explicit: Option<&Path>, as_json: bool) -> Result<()> {
    let config = load_config(explicit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config.to_toml_string()?);
    }

    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    use colored::Colorize;

    let path = path.unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG));

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let content = Config::default().to_toml_string()?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    eprintln!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

fn show_path(explicit: Option<&Path>) -> Result<()> {
    match resolve_config_path(explicit) {
        Some(path) => println!("{}", path.display()),
        None => println!("(defaults)"),
    }
    Ok(())
}
