//! Command line options and logging setup.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::app::AppOptions;
use crate::particles::ParticleMode;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "folio_tui=info";

/// Terminal portfolio
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Single-page portfolio in the terminal")]
pub struct Args {
    /// TOML profile to display instead of the built-in one
    #[arg(long, env = "FOLIO_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Background animation
    #[arg(long, value_enum, default_value_t = ParticleMode::Stars, env = "FOLIO_PARTICLES")]
    pub particles: ParticleMode,

    /// Rows ahead of the viewport top used to pick the active section
    #[arg(long, default_value_t = 3, env = "FOLIO_LOOKAHEAD")]
    pub lookahead: u32,

    /// Start with the cursor follower hidden
    #[arg(long, env = "FOLIO_NO_CURSOR")]
    pub no_cursor: bool,

    /// Append diagnostics to this file (nothing is logged otherwise)
    #[arg(long, env = "FOLIO_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Print the built-in profile as TOML and exit
    #[arg(long)]
    pub dump_profile: bool,
}

impl Args {
    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            particles: self.particles,
            lookahead: self.lookahead,
            cursor: !self.no_cursor,
        }
    }
}

/// Install a file-backed subscriber. The terminal belongs to the UI, so
/// there is no stdout fallback.
pub fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(())
}
