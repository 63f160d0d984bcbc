//! Tracing subscriber setup for the server binary.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install a stdout subscriber at `level`. `RUST_LOG`, when set, wins.
pub fn init(level: &str) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = level.parse::<LevelFilter>()?;
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()?;
    Ok(())
}
