//! `fuzzy-eval` - run a fuzzy comprehensive evaluation from a JSON command.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fuzzy_eval::adapters::init_logging;
use fuzzy_eval::application::{load_command, parse_command, EvaluateHandler};
use fuzzy_eval::config::AppConfig;

/// Evaluate samples × indicators data and print the verdict as JSON.
#[derive(Parser, Debug)]
#[command(name = "fuzzy-eval")]
#[command(version)]
#[command(about = "Fuzzy comprehensive evaluation of indicator data", long_about = None)]
struct Cli {
    /// JSON command file; reads stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Weighting method (entropy, frequency, average)
    #[arg(short, long)]
    method: Option<String>,

    /// Group count for frequency weighting
    #[arg(short = 'g', long)]
    groups: Option<usize>,

    /// Pretty-print the result JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    init_logging(&config.logging);

    let mut command = match &cli.input {
        Some(path) => load_command(path)
            .with_context(|| format!("failed to load command from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read command from stdin")?;
            parse_command(&buf)?
        }
    };

    if cli.method.is_some() {
        command.method = cli.method;
    }
    if cli.groups.is_some() {
        command.frequency_groups = cli.groups;
    }

    let handler = EvaluateHandler::new(config.evaluation);
    let result = handler
        .handle(command)
        .map_err(|e| anyhow::anyhow!("[{}] {}", e.code(), e))?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}
