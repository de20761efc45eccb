// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Tracing subscriber bootstrap.

use strata_core::PluginConfig;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn fallback_filter(config: &PluginConfig) -> EnvFilter {
    EnvFilter::new(&config.log_filter)
}

/// Install a fmt subscriber. `RUST_LOG` wins over `config.log_filter`.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging(config: &PluginConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(config));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
