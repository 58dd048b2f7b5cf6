//! Run command
//!
//! Apply an operation script to a fresh blog and print the results.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::io::{Read, Write};
use std::path::PathBuf;

use blog_core::render::RenderManager;
use blog_core::script::{Script, ScriptRunner};
use blog_core::{Blog, Config};

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One line per record, fields separated by spaces
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Script file (TOML or JSON), or '-' to read from stdin
    pub script: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by run and demo
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format (defaults to render.format from config)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Blog title, overriding the script's
    #[arg(long)]
    pub title: Option<String>,

    /// Print every post after the script finishes
    #[arg(long)]
    pub dump: bool,

    /// Record failing steps and continue instead of aborting
    #[arg(long)]
    pub keep_going: bool,
}

/// Execute the run command
pub fn execute(args: RunArgs, config: &Config) -> Result<()> {
    let script = if args.script.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read script from stdin")?;
        Script::parse(&content).context("Invalid script on stdin")?
    } else {
        Script::load(&args.script)
            .with_context(|| format!("Failed to load script {}", args.script.display()))?
    };

    run_script(&script, &args.output, config)
}

/// Run a script and write the rendered outcomes to stdout
pub fn run_script(script: &Script, output: &OutputArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let title = output
        .title
        .clone()
        .or_else(|| script.title.clone())
        .unwrap_or_else(|| config.blog.default_title.clone());
    let mut blog = Blog::new(title);

    let runner = ScriptRunner::from_config(&config.script)
        .with_stop_on_error(config.script.stop_on_error && !output.keep_going);
    let reports = runner.run(&mut blog, script)?;

    let format = output
        .format
        .map(|f| f.name().to_string())
        .unwrap_or_else(|| config.render.format.clone());
    let renderers = RenderManager::from_config(&config.render);
    let renderer = renderers.get(&format)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0;

    for report in &reports {
        if let blog_core::script::Outcome::Failed(message) = &report.outcome {
            failed += 1;
            eprintln!(
                "{} step {} ({}): {}",
                "✗".red(),
                report.step,
                report.op.cyan(),
                message
            );
            continue;
        }
        for line in report.outcome.render(renderer)? {
            writeln!(out, "{}", line).context("Failed to write to stdout")?;
        }
    }

    if output.dump {
        let posts: Vec<_> = blog.all_posts().iter().collect();
        for line in renderer.render_posts(&posts)? {
            writeln!(out, "{}", line).context("Failed to write to stdout")?;
        }
    }

    if config.script.warn_on_duplicate_titles {
        for title in blog.duplicate_titles() {
            tracing::warn!("Several posts share the title '{}'; lookups use the first", title);
        }
    }

    tracing::info!(
        "Ran {} step(s), {} failed, {} post(s) in '{}'",
        reports.len(),
        failed,
        blog.len(),
        blog.title()
    );

    Ok(())
}
