// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Plugin configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Host-supplied plugin settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    /// Name the plugin is registered under in the app shell.
    pub js_name: String,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            js_name: "Strata".into(),
            log_filter: "info".into(),
        }
    }
}

impl PluginConfig {
    /// Parse a JSON config object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
