//! Demo command
//!
//! Run a bundled script that exercises every operation.

use anyhow::{Context, Result};
use clap::Args;

use blog_core::script::Script;
use blog_core::Config;

use super::run::{run_script, OutputArgs};

/// Bundled demo script
pub const DEMO_SCRIPT: &str = include_str!("../../scripts/demo.toml");

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Print the demo script instead of running it
    #[arg(long)]
    pub show_script: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute the demo command
pub fn execute(args: DemoArgs, config: &Config) -> Result<()> {
    if args.show_script {
        print!("{}", DEMO_SCRIPT);
        return Ok(());
    }

    let script = Script::from_toml_str(DEMO_SCRIPT).context("Bundled demo script is invalid")?;
    run_script(&script, &args.output, config)
}
