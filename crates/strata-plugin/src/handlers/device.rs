// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Device metadata and power state.

use strata_bridge::traits::{BuildInfo, PlatformServices};
use strata_core::types::{CapabilityResponse, DeviceInfo, PerformanceMode};
use tracing::{debug, warn};

/// Placeholder for build metadata the platform would not give us.
const UNKNOWN: &str = "unknown";

/// `getDeviceInfo`: always a mobile Android device.
pub fn get_device_info(services: &dyn PlatformServices) -> CapabilityResponse {
    let model = services.model().unwrap_or_else(|e| {
        warn!("Build.MODEL unavailable: {e}");
        UNKNOWN.to_string()
    });
    let os_version = services.os_version().unwrap_or_else(|e| {
        warn!("Build.VERSION.RELEASE unavailable: {e}");
        UNKNOWN.to_string()
    });

    debug!(%model, %os_version, "device info");
    DeviceInfo {
        is_mobile: true,
        platform: "android".into(),
        model,
        os_version,
    }
    .into()
}

/// `getPerformanceMode`: power-save detection is not wired up, so this is
/// always disabled.
pub fn get_performance_mode() -> CapabilityResponse {
    PerformanceMode { enabled: false }.into()
}
