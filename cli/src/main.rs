use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use cycle_detection::{Category, RexifReader};

mod config;
mod prompt;
mod run;

use config::{ConfigFlags, RunConfig};
use prompt::Prompter;

#[derive(Parser)]
#[command(name = "capture-report")]
#[command(about = "Daily battery cycle report for VISUAL and THERMAL survey imagery")]
struct Cli {
    /// VISUAL category root folder (prompted for when omitted)
    #[arg(long)]
    visual: Option<PathBuf>,

    /// THERMAL category root folder (prompted for when omitted)
    #[arg(long)]
    thermal: Option<PathBuf>,

    /// Output CSV base name, without extension
    #[arg(short, long)]
    output: Option<String>,

    /// Also write the summaries as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Never prompt; unanswered values count as empty
    #[arg(long)]
    non_interactive: bool,

    /// Log every image processed
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = collect_config(&cli)?;
    let reports = run::run(&config, RexifReader)?;

    println!();
    for report in reports.values() {
        println!("{report}");
        println!();
    }
    println!("💾 Report saved to: {}", config.csv_path().display());

    Ok(())
}

/// Merge flags and stdin answers into a validated configuration
fn collect_config(cli: &Cli) -> Result<RunConfig> {
    let mut folders = BTreeMap::new();
    if let Some(path) = &cli.visual {
        folders.insert(Category::Visual, path.clone());
    }
    if let Some(path) = &cli.thermal {
        folders.insert(Category::Thermal, path.clone());
    }
    let flags = ConfigFlags {
        folders,
        output_name: cli.output.clone(),
        json_path: cli.json.clone(),
        non_interactive: cli.non_interactive,
    };

    let stdin = io::stdin();
    Prompter::new(stdin.lock(), io::stdout()).collect_config(&flags)
}
