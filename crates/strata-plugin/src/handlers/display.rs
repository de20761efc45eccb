// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Orientation lock and touch handling.
//
// Neither is implemented on Android yet: both parse and log their input,
// then acknowledge without touching the activity.

use strata_core::types::{CapabilityRequest, CapabilityResponse, Orientation, TouchOptions};
use tracing::{debug, warn};

/// `setScreenOrientation`: acknowledged without effect.
// TODO: map Orientation onto Activity.setRequestedOrientation.
pub fn set_screen_orientation(request: &CapabilityRequest) -> CapabilityResponse {
    let requested = request.get_string("orientation", "any");
    match Orientation::parse(&requested) {
        Some(orientation) => debug!(?orientation, "orientation lock not implemented; ignoring"),
        None => warn!(%requested, "unknown orientation; ignoring"),
    }
    CapabilityResponse::Ack
}

/// `configureTouchHandling`: acknowledged without effect.
pub fn configure_touch_handling(request: &CapabilityRequest) -> CapabilityResponse {
    let options = TouchOptions::from_request(request);
    debug!(
        prevent_scrolling = options.prevent_scrolling,
        prevent_zooming = options.prevent_zooming,
        "touch handling is a no-op on Android"
    );
    CapabilityResponse::Ack
}
