// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Blocking entry point for hosts that call in from a foreign thread.
//
// The JNI exports in `android` wrap one `NativeHost`: the plugin plus a
// small tokio runtime to drive its async handlers to completion.

use std::sync::Arc;

use strata_bridge::traits::PlatformServices;
use strata_core::PluginConfig;
use strata_core::error::{Result, StrataError};
use tokio::runtime::{Builder, Runtime};

use crate::plugin::StrataPlugin;

pub struct NativeHost {
    runtime: Runtime,
    plugin: StrataPlugin,
}

impl NativeHost {
    pub fn new(services: Arc<dyn PlatformServices>, config: PluginConfig) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("strata-plugin")
            .enable_all()
            .build()
            .map_err(|e| StrataError::Bridge(format!("failed to start tokio runtime: {e}")))?;

        Ok(Self {
            runtime,
            plugin: StrataPlugin::with_config(services, config),
        })
    }

    /// Parse a host-supplied config string; blank means defaults.
    pub fn parse_config(json: &str) -> Result<PluginConfig> {
        if json.trim().is_empty() {
            return Ok(PluginConfig::default());
        }
        PluginConfig::from_json(json)
    }

    pub fn plugin(&self) -> &StrataPlugin {
        &self.plugin
    }

    /// Run one call to completion on the calling thread.
    ///
    /// Must not be called from the UI thread: `getSafeAreaInsets` waits for
    /// a task posted there.
    pub fn invoke_blocking(&self, method: &str, params_json: &str) -> Result<String> {
        self.runtime
            .block_on(self.plugin.invoke_json(method, params_json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePlatform;
    use serde_json::{Value, json};

    fn host() -> NativeHost {
        NativeHost::new(Arc::new(FakePlatform::capable()), PluginConfig::default()).unwrap()
    }

    #[test]
    fn blocking_invoke_resolves_the_ui_hop() {
        let out = host().invoke_blocking("getSafeAreaInsets", "").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!({"top": 24, "right": 0, "bottom": 48, "left": 0}));
    }

    #[test]
    fn blocking_invoke_reports_unknown_methods() {
        let err = host().invoke_blocking("rotate", "{}").unwrap_err();
        assert!(matches!(err, StrataError::UnknownCapability(_)));
    }

    #[test]
    fn blank_config_means_defaults() {
        assert_eq!(NativeHost::parse_config("  ").unwrap(), PluginConfig::default());
        let config = NativeHost::parse_config(r#"{"jsName":"Strata3D"}"#).unwrap();
        assert_eq!(
            NativeHost::new(Arc::new(FakePlatform::capable()), config)
                .unwrap()
                .plugin()
                .js_name(),
            "Strata3D"
        );
    }
}
