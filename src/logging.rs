// SPDX-License-Identifier: MPL-2.0
//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` wins when set; otherwise the `[logging] level` setting is
//! used, falling back to [`DEFAULT_LOG_LEVEL`].

use crate::config::{LoggingConfig, DEFAULT_LOG_LEVEL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter for the given settings, ignoring the environment.
///
/// An unparseable directive falls back to the default level.
#[must_use]
pub fn filter_for(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(config.level_or_default())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(config));

    // Fails only when a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
