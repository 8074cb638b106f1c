//! CLI definitions and entry point

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use pushperm::config::Config;
use pushperm::output::OutputMode;
use pushperm::runner::Runner;

/// pushperm - Check that pushing workflows declare `contents: write`
#[derive(Parser, Debug)]
#[command(
    name = "pushperm",
    version,
    about = "Check that workflows which push declare 'contents: write'",
    long_about = "Scan .github/workflows for steps that push to the repository.\n\n\
                  Every workflow that pushes must grant 'contents: write' (or 'write-all')\n\
                  at the workflow level or on one of its jobs."
)]
pub struct Cli {
    /// Workflow directory to scan
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file (defaults to .pushperm.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(Path::new("."))?,
    };

    let directory = cli.dir.unwrap_or_else(|| config.workflows_dir());
    let classifier = config.classifier()?;
    debug!(
        "scanning {} with {} push pattern(s)",
        directory.display(),
        classifier.patterns().len()
    );

    let runner = Runner::new(directory, classifier);
    let report = runner.run();
    report.render(output_mode);

    Ok(ExitCode::from(report.exit_code()))
}
