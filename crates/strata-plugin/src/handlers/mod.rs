// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// One module per platform subsystem. Handlers are independent and keep no
// state between calls.

pub mod device;
pub mod display;
pub mod haptics;
pub mod insets;
