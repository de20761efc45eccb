// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Strata — Native platform service abstractions.
//
// Capability handlers talk to the OS only through the traits in `traits`.
// The Android backend implements them over JNI; every other target gets the
// stub so the workspace builds and tests on desktop/CI.

use std::sync::Arc;

pub mod host;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

/// Platform services for the target operating system.
///
/// Returned as an `Arc` because the safe-area handler moves a clone of it
/// onto the UI thread.
pub fn platform_services() -> Arc<dyn traits::PlatformServices> {
    #[cfg(target_os = "android")]
    {
        Arc::new(android::AndroidPlatform::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        Arc::new(stub::StubPlatform)
    }
}
