// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Host-boundary plumbing shared by the JNI backend.
//
// Kept target-independent so the rules it enforces can be tested off-device:
//
// - the host context (JavaVM + Activity) is registered once, and reads
//   before registration are errors rather than panics;
// - a Java exception left pending by a failed call is cleared before the
//   error is reported, so it never rethrows into the host;
// - a UI task that panics is contained instead of unwinding across the
//   `extern "system"` boundary.

#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use std::fmt::Display;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::OnceLock;

use strata_core::error::{Result, StrataError};

use crate::traits::UiTask;

/// Raw `JavaVM*` and Activity global reference handed over by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostContext {
    vm: usize,
    activity: usize,
}

impl HostContext {
    pub fn new(vm: *mut std::ffi::c_void, activity: *mut std::ffi::c_void) -> Self {
        Self {
            vm: vm as usize,
            activity: activity as usize,
        }
    }

    pub fn vm(&self) -> *mut std::ffi::c_void {
        self.vm as *mut std::ffi::c_void
    }

    pub fn activity(&self) -> *mut std::ffi::c_void {
        self.activity as *mut std::ffi::c_void
    }
}

/// Write-once holder for the host context.
pub struct ContextSlot {
    inner: OnceLock<HostContext>,
}

impl ContextSlot {
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Store `ctx` unless a context is already registered. Returns `true`
    /// if this call stored it.
    pub fn register(&self, ctx: HostContext) -> bool {
        if ctx.vm == 0 || ctx.activity == 0 {
            return false;
        }
        self.inner.set(ctx).is_ok()
    }

    pub fn get(&self) -> Result<HostContext> {
        self.inner.get().copied().ok_or_else(|| {
            StrataError::Bridge(
                "host context not registered: call StrataNative.nativeInit from Plugin.load()"
                    .into(),
            )
        })
    }
}

impl Default for ContextSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide host context.
pub static HOST: ContextSlot = ContextSlot::new();

/// Access to the calling thread's pending-exception state.
pub trait PendingException {
    fn exception_pending(&mut self) -> bool;

    fn clear_exception(&mut self);
}

/// Turn the outcome of one JNI call into a `Result`, clearing any Java
/// exception it left pending.
///
/// A call can succeed at the JNI level and still leave an exception behind,
/// so the check runs on both paths.
pub fn settle<T, E: Display>(
    jvm: &mut impl PendingException,
    context: &str,
    outcome: std::result::Result<T, E>,
) -> Result<T> {
    let pending = jvm.exception_pending();
    if pending {
        jvm.clear_exception();
    }
    match outcome {
        Err(e) => Err(StrataError::Bridge(format!("{context}: {e}"))),
        Ok(_) if pending => Err(StrataError::Bridge(format!(
            "{context}: Java exception cleared"
        ))),
        Ok(value) => Ok(value),
    }
}

/// Run a UI task, containing any panic. Returns `false` if it panicked.
pub fn run_contained(task: UiTask) -> bool {
    match catch_unwind(AssertUnwindSafe(task)) {
        Ok(()) => true,
        Err(_) => {
            tracing::error!("UI task panicked; dropped at the JNI boundary");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct FakeJvm {
        pending: bool,
        clears: usize,
    }

    impl PendingException for FakeJvm {
        fn exception_pending(&mut self) -> bool {
            self.pending
        }

        fn clear_exception(&mut self) {
            self.pending = false;
            self.clears += 1;
        }
    }

    fn ctx(vm: usize, activity: usize) -> HostContext {
        HostContext::new(vm as *mut _, activity as *mut _)
    }

    #[test]
    fn unregistered_context_is_an_error() {
        let slot = ContextSlot::new();
        assert!(matches!(slot.get(), Err(StrataError::Bridge(_))));
    }

    #[test]
    fn first_registration_wins() {
        let slot = ContextSlot::new();
        assert!(slot.register(ctx(0x10, 0x20)));
        assert!(!slot.register(ctx(0x30, 0x40)));
        assert_eq!(slot.get().unwrap(), ctx(0x10, 0x20));
    }

    #[test]
    fn null_pointers_are_not_registered() {
        let slot = ContextSlot::new();
        assert!(!slot.register(ctx(0, 0x20)));
        assert!(!slot.register(ctx(0x10, 0)));
        assert!(slot.get().is_err());
    }

    #[test]
    fn failed_call_clears_its_exception() {
        let mut jvm = FakeJvm {
            pending: true,
            ..Default::default()
        };
        let outcome: std::result::Result<(), &str> = Err("Java exception was thrown");
        let err = settle(&mut jvm, "vibrate(effect)", outcome).unwrap_err();
        assert!(err.to_string().contains("vibrate(effect)"));
        assert!(!jvm.pending);
        assert_eq!(jvm.clears, 1);
    }

    #[test]
    fn exception_after_ok_is_still_an_error() {
        let mut jvm = FakeJvm {
            pending: true,
            ..Default::default()
        };
        let outcome: std::result::Result<i32, &str> = Ok(26);
        assert!(settle(&mut jvm, "SDK_INT", outcome).is_err());
        assert!(!jvm.pending);
    }

    #[test]
    fn clean_call_passes_through() {
        let mut jvm = FakeJvm::default();
        let outcome: std::result::Result<i32, &str> = Ok(34);
        assert_eq!(settle(&mut jvm, "SDK_INT", outcome).unwrap(), 34);
        assert_eq!(jvm.clears, 0);
    }

    #[test]
    fn panicking_task_is_contained() {
        assert!(!run_contained(Box::new(|| panic!("view detached"))));
    }

    #[test]
    fn task_runs_once() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        assert!(run_contained(Box::new(move || flag.store(true, Ordering::SeqCst))));
        assert!(ran.load(Ordering::SeqCst));
    }
}
