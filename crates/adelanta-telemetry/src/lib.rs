//! Tracing setup shared by the binaries.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber: compact fmt output, filtered by
/// `RUST_LOG` with an `info` default.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

    tracing::debug!("tracing initialized");
    Ok(())
}
