//! Tracing initialization.
//!
//! Log verbosity comes from `RUST_LOG` (defaulting to `info`), and the output format from the
//! `log_format` config key:
//!
//! ```bash
//! RUST_LOG=hotelctl=debug,tower_http=info hotelctl -f config.yaml
//! HOTELCTL_LOG_FORMAT=json hotelctl
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogFormat;

/// Install the global tracing subscriber.
///
/// Fails if a subscriber was already installed for this process.
pub fn init_telemetry(log_format: LogFormat) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
                .try_init()?;
        }
    }

    info!(?log_format, "Telemetry initialized");
    Ok(())
}
