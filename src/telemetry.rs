//! Global tracing subscriber setup.

use std::error::Error;

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber: JSON lines when `json` is set, compact
/// text otherwise. `RUST_LOG` wins over `default_filter`.
///
/// Fails if a global subscriber is already installed. Callers cannot log
/// that failure through `tracing`.
pub fn init_tracing(default_filter: &str, json: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if json {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).compact().try_init()
    }
}
