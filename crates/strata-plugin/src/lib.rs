// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Strata — Device capability plugin.
//
// Receives a named capability request from the app shell, runs exactly one
// platform query or action through `strata_bridge`, and resolves with a flat
// object or an empty acknowledgement. Handlers never fail outward.

pub mod handlers;
pub mod logging;
pub mod native;
pub mod plugin;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(test)]
pub(crate) mod testing;

pub use logging::init_logging;
pub use native::NativeHost;
pub use plugin::{PluginMethod, ReturnType, StrataPlugin};
