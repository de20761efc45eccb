// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Request/response model for the Strata capability bridge.

use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Result, StrataError};

/// The fixed set of operations the plugin exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    GetDeviceInfo,
    Haptics,
    SetScreenOrientation,
    GetSafeAreaInsets,
    GetPerformanceMode,
    ConfigureTouchHandling,
}

impl Capability {
    /// All capabilities, in registration order.
    pub const ALL: [Capability; 6] = [
        Self::GetDeviceInfo,
        Self::Haptics,
        Self::SetScreenOrientation,
        Self::GetSafeAreaInsets,
        Self::GetPerformanceMode,
        Self::ConfigureTouchHandling,
    ];

    /// Method name as the app shell calls it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetDeviceInfo => "getDeviceInfo",
            Self::Haptics => "haptics",
            Self::SetScreenOrientation => "setScreenOrientation",
            Self::GetSafeAreaInsets => "getSafeAreaInsets",
            Self::GetPerformanceMode => "getPerformanceMode",
            Self::ConfigureTouchHandling => "configureTouchHandling",
        }
    }

    /// Look up a capability by its method name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl FromStr for Capability {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| StrataError::UnknownCapability(s.to_string()))
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A single call from the app shell: a capability plus its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityRequest {
    pub capability: Capability,
    params: Map<String, Value>,
}

impl CapabilityRequest {
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            params: Map::new(),
        }
    }

    /// Builder-style parameter setter.
    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Build a request from a method name and a JSON parameter object.
    ///
    /// An empty string or `null` means "no parameters".
    pub fn from_json(method: &str, params_json: &str) -> Result<Self> {
        let capability: Capability = method.parse()?;
        let params = match params_json.trim() {
            "" | "null" => Map::new(),
            json => serde_json::from_str::<Map<String, Value>>(json)?,
        };
        Ok(Self { capability, params })
    }

    /// String parameter, or `default` if absent or not a string.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.params
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    /// Boolean parameter, or `default` if absent or not a boolean.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.params
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// What a handler resolves with.
#[derive(Debug, Clone, PartialEq)]
pub enum CapabilityResponse {
    /// Empty acknowledgement (`null` on the wire).
    Ack,
    /// Flat key/value object.
    Object(Map<String, Value>),
}

impl CapabilityResponse {
    pub fn is_ack(&self) -> bool {
        matches!(self, Self::Ack)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Ack => None,
            Self::Object(map) => map.get(key),
        }
    }

    /// Keys of the response object; empty for an acknowledgement.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::Ack => Vec::new(),
            Self::Object(map) => map.keys().map(String::as_str).collect(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Ack => Value::Null,
            Self::Object(map) => Value::Object(map.clone()),
        }
    }
}

impl Serialize for CapabilityResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Ack => serializer.serialize_unit(),
            Self::Object(map) => map.serialize(serializer),
        }
    }
}

// ---------------------------------------------------------------------------
// Parameter enums
// ---------------------------------------------------------------------------

/// Kind of haptic feedback requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticType {
    Impact,
    Notification,
    Selection,
}

impl HapticType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "impact" => Some(Self::Impact),
            "notification" => Some(Self::Notification),
            "selection" => Some(Self::Selection),
            _ => None,
        }
    }
}

/// Intensity of an impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticStyle {
    Light,
    Medium,
    Heavy,
}

impl HapticStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "medium" => Some(Self::Medium),
            "heavy" => Some(Self::Heavy),
            _ => None,
        }
    }
}

/// Screen orientation lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Any,
    Portrait,
    Landscape,
    PortraitPrimary,
    PortraitSecondary,
    LandscapePrimary,
    LandscapeSecondary,
}

impl Orientation {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "any" => Some(Self::Any),
            "portrait" => Some(Self::Portrait),
            "landscape" => Some(Self::Landscape),
            "portrait-primary" => Some(Self::PortraitPrimary),
            "portrait-secondary" => Some(Self::PortraitSecondary),
            "landscape-primary" => Some(Self::LandscapePrimary),
            "landscape-secondary" => Some(Self::LandscapeSecondary),
            _ => None,
        }
    }
}

/// Game-style touch handling flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TouchOptions {
    pub prevent_scrolling: bool,
    pub prevent_zooming: bool,
}

impl TouchOptions {
    pub fn from_request(request: &CapabilityRequest) -> Self {
        Self {
            prevent_scrolling: request.get_bool("preventScrolling", false),
            prevent_zooming: request.get_bool("preventZooming", false),
        }
    }
}

// ---------------------------------------------------------------------------
// Typed results
// ---------------------------------------------------------------------------

/// Result of `getDeviceInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub is_mobile: bool,
    pub platform: String,
    pub model: String,
    pub os_version: String,
}

impl From<DeviceInfo> for CapabilityResponse {
    fn from(info: DeviceInfo) -> Self {
        let mut map = Map::new();
        map.insert("isMobile".into(), info.is_mobile.into());
        map.insert("platform".into(), info.platform.into());
        map.insert("model".into(), info.model.into());
        map.insert("osVersion".into(), info.os_version.into());
        Self::Object(map)
    }
}

/// System-bar insets in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeAreaInsets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl SafeAreaInsets {
    /// Build from raw platform values; negatives clamp to zero.
    pub fn from_raw(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        let clamp = |v: i32| u32::try_from(v).unwrap_or(0);
        Self {
            top: clamp(top),
            right: clamp(right),
            bottom: clamp(bottom),
            left: clamp(left),
        }
    }
}

impl From<SafeAreaInsets> for CapabilityResponse {
    fn from(insets: SafeAreaInsets) -> Self {
        let mut map = Map::new();
        map.insert("top".into(), insets.top.into());
        map.insert("right".into(), insets.right.into());
        map.insert("bottom".into(), insets.bottom.into());
        map.insert("left".into(), insets.left.into());
        Self::Object(map)
    }
}

/// Result of `getPerformanceMode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMode {
    pub enabled: bool,
}

impl From<PerformanceMode> for CapabilityResponse {
    fn from(mode: PerformanceMode) -> Self {
        let mut map = Map::new();
        map.insert("enabled".into(), mode.enabled.into());
        Self::Object(map)
    }
}
