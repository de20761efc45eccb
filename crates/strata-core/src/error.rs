// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Unified error types for Strata.
//
// Capability handlers never surface these to the host: they substitute a
// no-op or zeroed default. Only the JSON invocation surface returns them.

use thiserror::Error;

/// Top-level error type for all Strata operations.
#[derive(Debug, Error)]
pub enum StrataError {
    // -- Dispatch --
    #[error("unknown capability: {0}")]
    UnknownCapability(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, StrataError>;
