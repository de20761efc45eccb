// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Haptic feedback through the system vibrator.
//
// On API 26+ the type/style pair selects a one-shot duration:
//
// | type        | style  | ms  |
// |-------------|--------|-----|
// | impact      | heavy  | 100 |
// | impact      | medium | 50  |
// | impact      | other  | 20  |
// | selection   | any    | 10  |
// | other       | any    | 50  |
//
// Older platforms always get a 50 ms legacy vibration.

use strata_bridge::traits::{BuildInfo, PlatformServices, Vibration, Vibrator, api_level};
use strata_core::types::{CapabilityRequest, CapabilityResponse, HapticStyle, HapticType};
use tracing::{debug, warn};

/// Duration used when the table has no better answer, and on pre-Oreo.
pub const DEFAULT_DURATION_MS: u64 = 50;

/// One-shot duration for a type/style pair. `None` means the string did not
/// name a known value.
pub fn one_shot_duration_ms(kind: Option<HapticType>, style: Option<HapticStyle>) -> u64 {
    match kind {
        Some(HapticType::Impact) => match style {
            Some(HapticStyle::Heavy) => 100,
            Some(HapticStyle::Medium) => 50,
            _ => 20,
        },
        Some(HapticType::Selection) => 10,
        _ => DEFAULT_DURATION_MS,
    }
}

/// Pick the vibration for the platform's API level.
pub fn select_vibration(
    sdk_int: i32,
    kind: Option<HapticType>,
    style: Option<HapticStyle>,
) -> Vibration {
    if sdk_int >= api_level::O {
        Vibration::OneShot {
            duration_ms: one_shot_duration_ms(kind, style),
        }
    } else {
        Vibration::Legacy {
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// `haptics`: resolves with an acknowledgement whether or not anything
/// vibrated.
pub fn haptics(services: &dyn PlatformServices, request: &CapabilityRequest) -> CapabilityResponse {
    let kind = request.get_string("type", "impact");
    let style = request.get_string("style", "medium");

    match services.has_vibrator() {
        Ok(true) => {}
        Ok(false) => {
            debug!("no vibrator; haptics ignored");
            return CapabilityResponse::Ack;
        }
        Err(e) => {
            warn!("vibrator query failed: {e}");
            return CapabilityResponse::Ack;
        }
    }

    let sdk_int = services.sdk_int().unwrap_or_else(|e| {
        warn!("SDK_INT unavailable, assuming legacy vibrator: {e}");
        0
    });
    let vibration = select_vibration(sdk_int, HapticType::parse(&kind), HapticStyle::parse(&style));

    debug!(%kind, %style, ?vibration, "haptics");
    if let Err(e) = services.vibrate(vibration) {
        warn!(?vibration, "vibration failed: {e}");
    }
    CapabilityResponse::Ack
}
