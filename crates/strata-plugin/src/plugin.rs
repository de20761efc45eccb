// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Name-based dispatch from the app shell to the capability handlers.

use std::sync::Arc;

use serde::Serialize;
use strata_bridge::traits::PlatformServices;
use strata_core::error::Result;
use strata_core::types::{Capability, CapabilityRequest, CapabilityResponse};
use strata_core::PluginConfig;
use tracing::info;

use crate::handlers::{device, display, haptics, insets};

/// How a method resolves on the shell side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnType {
    Promise,
}

/// One entry of the plugin's method table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginMethod {
    pub name: &'static str,
    pub return_type: ReturnType,
}

/// The Strata plugin: a stateless router over injected platform services.
#[derive(Clone)]
pub struct StrataPlugin {
    services: Arc<dyn PlatformServices>,
    config: PluginConfig,
}

impl StrataPlugin {
    pub fn new(services: Arc<dyn PlatformServices>) -> Self {
        Self::with_config(services, PluginConfig::default())
    }

    pub fn with_config(services: Arc<dyn PlatformServices>, config: PluginConfig) -> Self {
        info!(
            js_name = %config.js_name,
            platform = services.platform_name(),
            "Strata plugin loaded"
        );
        Self { services, config }
    }

    /// Name the shell registers the plugin under.
    pub fn js_name(&self) -> &str {
        &self.config.js_name
    }

    /// Registered methods, in registration order.
    pub fn methods(&self) -> Vec<PluginMethod> {
        Capability::ALL
            .into_iter()
            .map(|capability| PluginMethod {
                name: capability.as_str(),
                return_type: ReturnType::Promise,
            })
            .collect()
    }

    /// Run one request to completion. Never fails: platform problems resolve
    /// as each capability's documented default.
    pub async fn handle(&self, request: CapabilityRequest) -> CapabilityResponse {
        info!(capability = %request.capability, "dispatching");
        match request.capability {
            Capability::GetDeviceInfo => device::get_device_info(self.services.as_ref()),
            Capability::Haptics => haptics::haptics(self.services.as_ref(), &request),
            Capability::SetScreenOrientation => display::set_screen_orientation(&request),
            Capability::GetSafeAreaInsets => {
                insets::get_safe_area_insets(Arc::clone(&self.services)).await
            }
            Capability::GetPerformanceMode => device::get_performance_mode(),
            Capability::ConfigureTouchHandling => display::configure_touch_handling(&request),
        }
    }

    /// JSON in, JSON out. Fails only on an unknown method name or a
    /// parameter payload that is not a JSON object.
    pub async fn invoke_json(&self, method: &str, params_json: &str) -> Result<String> {
        let request = CapabilityRequest::from_json(method, params_json)?;
        let response = self.handle(request).await;
        Ok(serde_json::to_string(&response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePlatform;
    use serde_json::{Value, json};
    use strata_bridge::traits::Vibration;
    use strata_core::StrataError;

    fn plugin() -> (StrataPlugin, Arc<FakePlatform>) {
        let platform = Arc::new(FakePlatform::capable());
        (StrataPlugin::new(platform.clone()), platform)
    }

    async fn call(plugin: &StrataPlugin, method: &str, params: &str) -> Value {
        let out = plugin.invoke_json(method, params).await.unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn method_table_lists_all_six_as_promises() {
        let (plugin, _) = plugin();
        let names: Vec<_> = plugin.methods().iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "getDeviceInfo",
                "haptics",
                "setScreenOrientation",
                "getSafeAreaInsets",
                "getPerformanceMode",
                "configureTouchHandling",
            ]
        );
        assert!(plugin.methods().iter().all(|m| m.return_type == ReturnType::Promise));
        assert_eq!(
            serde_json::to_value(plugin.methods()[0]).unwrap(),
            json!({"name": "getDeviceInfo", "returnType": "promise"})
        );
    }

    #[test]
    fn js_name_comes_from_config() {
        let platform = Arc::new(FakePlatform::capable());
        let config = PluginConfig {
            js_name: "StrataDev".into(),
            ..PluginConfig::default()
        };
        assert_eq!(StrataPlugin::with_config(platform, config).js_name(), "StrataDev");
    }

    #[tokio::test]
    async fn routes_every_capability_by_name() {
        let (plugin, platform) = plugin();

        assert_eq!(
            call(&plugin, "getDeviceInfo", "").await,
            json!({"isMobile": true, "platform": "android", "model": "Pixel 8", "osVersion": "14"})
        );
        assert_eq!(
            call(&plugin, "haptics", r#"{"type":"impact","style":"heavy"}"#).await,
            Value::Null
        );
        assert_eq!(
            call(&plugin, "setScreenOrientation", r#"{"orientation":"portrait"}"#).await,
            Value::Null
        );
        assert_eq!(
            call(&plugin, "getSafeAreaInsets", "{}").await,
            json!({"top": 24, "right": 0, "bottom": 48, "left": 0})
        );
        assert_eq!(
            call(&plugin, "getPerformanceMode", "{}").await,
            json!({"enabled": false})
        );
        assert_eq!(
            call(&plugin, "configureTouchHandling", r#"{"preventScrolling":true}"#).await,
            Value::Null
        );

        assert_eq!(platform.recorded(), vec![Vibration::OneShot { duration_ms: 100 }]);
    }

    #[tokio::test]
    async fn unknown_method_is_an_error() {
        let (plugin, _) = plugin();
        let err = plugin.invoke_json("lockCursor", "{}").await.unwrap_err();
        assert!(matches!(err, StrataError::UnknownCapability(_)));
    }

    #[tokio::test]
    async fn malformed_params_are_an_error() {
        let (plugin, _) = plugin();
        let err = plugin.invoke_json("haptics", "{type:").await.unwrap_err();
        assert!(matches!(err, StrataError::Serialization(_)));
    }

    #[tokio::test]
    async fn calls_share_no_state() {
        let (plugin, platform) = plugin();
        let first = plugin
            .handle(CapabilityRequest::new(Capability::GetSafeAreaInsets))
            .await;
        let second = plugin
            .handle(CapabilityRequest::new(Capability::GetSafeAreaInsets))
            .await;
        assert_eq!(first, second);
        assert_eq!(platform.ui_post_count(), 2);
    }

    #[tokio::test]
    async fn stub_platform_never_fails_outward() {
        let plugin = StrataPlugin::new(strata_bridge::platform_services());
        for capability in Capability::ALL {
            let request = CapabilityRequest::new(capability);
            let _ = plugin.handle(request).await;
        }
        assert_eq!(
            call(&plugin, "getSafeAreaInsets", "").await,
            json!({"top": 0, "right": 0, "bottom": 0, "left": 0})
        );
        assert_eq!(
            call(&plugin, "getDeviceInfo", "").await["platform"],
            json!("android")
        );
    }
}
