//! Interactive command loop for the patient-flow engine.

mod menu;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use patient_flow_core::{FacilityConfig, FacilityCoordinator};
use tracing_subscriber::EnvFilter;

use session::Session;

#[derive(Parser, Debug)]
#[command(name = "patient-flow")]
#[command(about = "Hospital appointment and triage desk", version)]
struct Args {
    /// JSON facility config (doctors, slots, queue capacity)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let config = match &args.config {
        Some(path) => FacilityConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FacilityConfig::default(),
    };
    let facility =
        FacilityCoordinator::from_config(&config).context("Failed to seed facility")?;

    tracing::info!("patient-flow starting v{}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(facility, stdin.lock(), stdout.lock())
        .run()
        .context("Console I/O failed")
}
