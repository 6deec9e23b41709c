mod config;
mod visualize;

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use scene::Scene;
use scene::sample::DEFAULT_INPUT;

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("failed to read {input}: {source}")]
    Read { input: String, source: io::Error },
    #[error(transparent)]
    Visualize(#[from] visualize::VisualizeError),
    #[error("failed to encode scene: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "jsonscape", about = "Lay out a JSON document as a constellation of nodes")]
struct Cli {
    #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
    input: String,

    #[arg(long, conflicts_with = "input", help = "Visualize the built-in character/scene sample")]
    sample: bool,

    #[arg(long, value_parser = config::parse_max_nodes, help = "Node cap; overrides JSONSCAPE_MAX_NODES")]
    max_nodes: Option<usize>,

    #[arg(long, default_value_t = false, help = "Print the scene as a single line")]
    compact: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "visualize aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = Config::from_env()?.with_max_nodes(cli.max_nodes);
    let text = read_input(cli)?;
    let scene = visualize::visualize(&text, &config)?;
    print_scene(&scene, cli.compact)
}

fn read_input(cli: &Cli) -> Result<String, AppError> {
    if cli.sample {
        return Ok(DEFAULT_INPUT.to_owned());
    }
    if cli.input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| AppError::Read { input: "stdin".to_owned(), source })?;
        return Ok(text);
    }
    fs::read_to_string(&cli.input).map_err(|source| AppError::Read { input: cli.input.clone(), source })
}

fn print_scene(scene: &Scene, compact: bool) -> Result<(), AppError> {
    let rendered = if compact { serde_json::to_string(scene)? } else { serde_json::to_string_pretty(scene)? };
    println!("{rendered}");
    Ok(())
}
