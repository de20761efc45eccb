// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Platform-agnostic trait definitions for the OS services the plugin uses.
//
// Each trait wraps exactly one platform subsystem. Implementations report
// failures through `StrataError`; the handlers decide what default to use.

use strata_core::error::Result;
use strata_core::types::SafeAreaInsets;

/// Android API levels that gate behaviour.
pub mod api_level {
    /// Marshmallow: `View.getRootWindowInsets()`.
    pub const M: i32 = 23;
    /// Oreo: `VibrationEffect.createOneShot`.
    pub const O: i32 = 26;
}

/// Work posted to the UI thread.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Everything a capability handler may touch.
pub trait PlatformServices: Vibrator + WindowInsets + BuildInfo + UiThread + Send + Sync {
    /// Human-readable backend name (e.g. "Android").
    fn platform_name(&self) -> &str;
}

/// A single vibration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vibration {
    /// `VibrationEffect.createOneShot(duration, DEFAULT_AMPLITUDE)`.
    OneShot { duration_ms: u64 },
    /// Pre-Oreo `Vibrator.vibrate(long)`.
    Legacy { duration_ms: u64 },
}

/// The system vibrator service.
pub trait Vibrator {
    /// Whether the device has vibration hardware at all.
    fn has_vibrator(&self) -> Result<bool>;

    fn vibrate(&self, vibration: Vibration) -> Result<()>;
}

/// Window-insets query. Must be called on the UI thread.
pub trait WindowInsets {
    /// System-bar insets of the root view, or `None` if the view has not
    /// been attached yet.
    fn system_bar_insets(&self) -> Result<Option<SafeAreaInsets>>;
}

/// Build and version metadata.
pub trait BuildInfo {
    /// `Build.MODEL`.
    fn model(&self) -> Result<String>;

    /// `Build.VERSION.RELEASE`.
    fn os_version(&self) -> Result<String>;

    /// `Build.VERSION.SDK_INT`.
    fn sdk_int(&self) -> Result<i32>;
}

/// The UI-affine execution context.
pub trait UiThread {
    /// Post `task` to the UI thread. `Ok` means the task was accepted, not
    /// that it has run.
    fn run_on_ui_thread(&self, task: UiTask) -> Result<()>;
}
