// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Strata — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::PluginConfig;
pub use error::StrataError;
pub use types::*;
