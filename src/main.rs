//! WaveShaper - spectral equalizer and compressor for WAV files
//!
//! Loads a WAV, shapes its spectrum and writes a normalized 16-bit mono WAV.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waveshaper::cli::Args;
use waveshaper::session::Session;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waveshaper=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let settings = args.settings();

    let mut session = Session::open(&args.input)
        .with_context(|| format!("Could not load {}", args.input.display()))?;
    tracing::info!(
        path = %session.path().display(),
        status = session.status(),
        duration_secs = session.duration_secs(),
        ?settings,
        "Processing"
    );

    session
        .save(&args.output, &settings)
        .with_context(|| format!("Could not write {}", args.output.display()))?;
    tracing::info!("{}", session.status());

    Ok(())
}
