//! Tracing initialisation.
//!
//! Library code only emits `tracing` events; binaries embedding this crate call
//! [`init_telemetry`] once at startup to print them. The filter comes from `RUST_LOG` and
//! defaults to `info`:
//!
//! ```bash
//! RUST_LOG=accessctl=debug,sqlx=warn
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install a global subscriber with an env filter and console output.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");
    Ok(())
}
