// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Stub platform for desktop/CI builds where Android services are unavailable.
//
// Queries report "no hardware" or `PlatformUnavailable`; the handlers turn
// those into their documented defaults.

use strata_core::error::{Result, StrataError};
use strata_core::types::SafeAreaInsets;

use crate::traits::*;

/// No-op platform returned on non-Android targets.
pub struct StubPlatform;

impl PlatformServices for StubPlatform {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl Vibrator for StubPlatform {
    fn has_vibrator(&self) -> Result<bool> {
        Ok(false)
    }

    fn vibrate(&self, _vibration: Vibration) -> Result<()> {
        tracing::warn!("Vibrator::vibrate called on stub platform");
        Err(StrataError::PlatformUnavailable)
    }
}

impl WindowInsets for StubPlatform {
    fn system_bar_insets(&self) -> Result<Option<SafeAreaInsets>> {
        Err(StrataError::PlatformUnavailable)
    }
}

impl BuildInfo for StubPlatform {
    fn model(&self) -> Result<String> {
        Err(StrataError::PlatformUnavailable)
    }

    fn os_version(&self) -> Result<String> {
        Err(StrataError::PlatformUnavailable)
    }

    fn sdk_int(&self) -> Result<i32> {
        Ok(0)
    }
}

impl UiThread for StubPlatform {
    /// There is no UI thread off-device; run the task inline.
    fn run_on_ui_thread(&self, task: UiTask) -> Result<()> {
        task();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn stub_reports_no_vibrator() {
        assert!(!StubPlatform.has_vibrator().unwrap());
    }

    #[test]
    fn stub_runs_ui_tasks_inline() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        StubPlatform
            .run_on_ui_thread(Box::new(move || flag.store(true, Ordering::SeqCst)))
            .unwrap();
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn stub_insets_are_unavailable() {
        assert!(matches!(
            StubPlatform.system_bar_insets(),
            Err(StrataError::PlatformUnavailable)
        ));
    }

    #[test]
    fn platform_services_selects_stub_off_device() {
        assert_eq!(crate::platform_services().platform_name(), "Desktop (stub)");
    }
}
