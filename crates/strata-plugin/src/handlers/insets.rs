// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Safe-area insets.
//
// The root view may only be read on the UI thread, so the query is posted
// there and the handler awaits a oneshot channel for the result. Every
// failure along the way resolves as all-zero insets.

use std::sync::Arc;

use strata_bridge::traits::{BuildInfo, PlatformServices, UiThread, WindowInsets, api_level};
use strata_core::types::{CapabilityResponse, SafeAreaInsets};
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// `getSafeAreaInsets`: `{top, right, bottom, left}`, zero when unknown.
pub async fn get_safe_area_insets(services: Arc<dyn PlatformServices>) -> CapabilityResponse {
    let sdk_int = services.sdk_int().unwrap_or_else(|e| {
        warn!("SDK_INT unavailable: {e}");
        0
    });
    if sdk_int < api_level::M {
        debug!(sdk_int, "platform predates root window insets");
        return SafeAreaInsets::default().into();
    }

    read_on_ui_thread(services).await.unwrap_or_default().into()
}

/// One hop onto the UI thread. `None` if the hop or the query failed.
async fn read_on_ui_thread(services: Arc<dyn PlatformServices>) -> Option<SafeAreaInsets> {
    let (tx, rx) = oneshot::channel();
    let reader = Arc::clone(&services);

    let posted = services.run_on_ui_thread(Box::new(move || {
        let insets = reader.system_bar_insets().unwrap_or_else(|e| {
            warn!("system bar insets query failed: {e}");
            None
        });
        // The receiver only goes away if the caller was dropped.
        let _ = tx.send(insets);
    }));

    if let Err(e) = posted {
        warn!("could not post insets query to UI thread: {e}");
        return None;
    }

    match rx.await {
        Ok(insets) => {
            debug!(?insets, "safe area insets");
            insets
        }
        Err(_) => {
            warn!("UI task dropped before reporting insets");
            None
        }
    }
}
