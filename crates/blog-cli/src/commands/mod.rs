//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod demo;
pub mod run;

use anyhow::{Context, Result};
use blog_core::Config;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Project-local configuration file
pub const LOCAL_CONFIG: &str = ".blogstore.toml";

/// blogstore - in-memory blog content store
#[derive(Debug, Parser)]
#[command(name = "blogstore")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BLOGSTORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run an operation script against a fresh blog
    Run(run::RunArgs),

    /// Run the built-in demo script
    Demo(demo::DemoArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Dispatch to command handler
    match cli.command {
        Commands::Run(args) => run::execute(args, &load_config(cli.config.as_deref())?),
        Commands::Demo(args) => demo::execute(args, &load_config(cli.config.as_deref())?),
        Commands::Config(cmd) => config::execute(cmd, cli.config.as_deref()),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// User-level configuration file
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("blogstore").join("config.toml"))
}

/// Configuration file in effect: explicit path, then local, then user
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }

    user_config_path().filter(|p| p.exists())
}

/// Load configuration, falling back to defaults when no file exists
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match resolve_config_path(explicit) {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            Config::load(&path)
                .with_context(|| format!("Invalid configuration: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}
