//! Command-line driver for the catalog explorer.
//!
//! # Responsibility
//! - Open one built-in catalog, replay interaction events, print the
//!   resulting snapshot as JSON.
//! - Keep a `--probe` mode to verify `archdeck_core` linkage.
//!
//! # Invariants
//! - Malformed or rejected events stop the replay with a non-zero exit code.
//! - Stdout carries only the probe lines or the snapshot JSON.

use archdeck_core::{BuiltinCatalog, BuiltinSession, ExplorerCommand};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "archdeck", version)]
#[command(about = "Explore a built-in architecture catalog", long_about = None)]
struct Cli {
    /// Built-in catalog to open (gke_app|gcp_infra)
    #[arg(long, default_value = "gke_app")]
    catalog: String,

    /// Log level; only used together with --log-dir
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print ping and version, then exit
    #[arg(long, default_value_t = false)]
    probe: bool,

    /// Events to replay in order: select:<item>, view:<view>, toggle:<period>
    events: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.probe {
        println!("archdeck_core ping={}", archdeck_core::ping());
        println!("archdeck_core version={}", archdeck_core::core_version());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("archdeck: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(archdeck_core::default_log_level());
        archdeck_core::init_logging(level, &log_dir.to_string_lossy())?;
    }

    let commands = parse_commands(&cli.events)?;
    let catalog = BuiltinCatalog::parse(&cli.catalog).map_err(|err| {
        format!(
            "{err}; expected {}",
            archdeck_core::supported_catalogs().join("|")
        )
    })?;
    let mut session = catalog.open().map_err(|err| err.to_string())?;
    replay(&mut session, commands)?;

    serde_json::to_string_pretty(&session.snapshot())
        .map_err(|err| format!("failed to encode snapshot: {err}"))
}

fn parse_commands(events: &[String]) -> Result<Vec<ExplorerCommand>, String> {
    events
        .iter()
        .map(|raw| raw.parse::<ExplorerCommand>().map_err(|err| err.to_string()))
        .collect()
}

fn replay(session: &mut BuiltinSession, commands: Vec<ExplorerCommand>) -> Result<(), String> {
    for (position, command) in commands.into_iter().enumerate() {
        let label = command.to_string();
        session
            .apply(command)
            .map_err(|err| format!("event #{} `{label}` rejected: {err}", position + 1))?;
    }
    Ok(())
}
