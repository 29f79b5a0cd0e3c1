//! Poflow - interactive gettext workflow helper.
//!
//! Walks a developer from a GUI definition file to compiled binary message
//! catalogs, delegating extraction and compilation to the standard gettext
//! tools.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use poflow::{Config, GettextTools, Prompter, WorkflowDriver, WorkflowError};

/// Interactive gettext workflow helper
#[derive(Parser)]
#[command(name = "poflow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Working directory for the workflow
    #[arg(short = 'C', long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Explicit configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the translation wizard (default)
    Run,

    /// Show the effective configuration
    Config {
        /// Show the config search paths instead
        #[arg(long)]
        path: bool,

        /// Output format (toml, json)
        #[arg(short, long, default_value = "toml")]
        format: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry().with(fmt::layer().with_target(false)).with(filter).init();

    anyhow::ensure!(cli.dir.is_dir(), "working directory {:?} does not exist", cli.dir);

    let config = match cli.config {
        Some(ref path) => Config::load_from_file(path)?,
        None => Config::load(&cli.dir)?,
    };

    match cli.command {
        None | Some(Commands::Run) => cmd_run(&config, &cli.dir),
        Some(Commands::Config { path, format }) => cmd_config(&config, &cli.dir, path, &format),
        Some(Commands::Completions { shell }) => {
            cmd_completions(shell);
            Ok(())
        }
    }
}

/// Run the interactive wizard.
fn cmd_run(config: &Config, workdir: &Path) -> Result<()> {
    let tools = GettextTools::from_config(config);
    let driver = WorkflowDriver::new(config, workdir, Prompter::console(), tools);

    match driver.run() {
        Ok(summary) => {
            tracing::debug!(
                languages = summary.languages.len(),
                domain = summary.domain.as_str(),
                "workflow finished"
            );
            Ok(())
        }
        Err(WorkflowError::Aborted) => std::process::exit(1),
        Err(err) => Err(err.into()),
    }
}

/// Show the effective configuration.
fn cmd_config(config: &Config, workdir: &Path, path: bool, format: &str) -> Result<()> {
    if path {
        println!("{}", workdir.join(".poflow.toml").display());
        if let Some(dir) = Config::config_dir() {
            println!("{}", dir.join("config.toml").display());
        }
        return Ok(());
    }

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(config)?),
        _ => print!("{}", toml::to_string_pretty(config)?),
    }

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "poflow", &mut std::io::stdout());
}
