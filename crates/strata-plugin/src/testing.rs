// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Recording platform double shared by the handler tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use strata_bridge::traits::*;
use strata_core::error::{Result, StrataError};
use strata_core::types::SafeAreaInsets;

/// How the fake treats posted UI tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Run on a freshly spawned thread, like a real UI looper.
    Thread,
    /// Reject the post.
    Refuse,
    /// Accept the post and drop the task without running it.
    Drop,
}

pub struct FakePlatform {
    pub sdk_int: i32,
    pub sdk_fails: bool,
    pub has_vibrator: bool,
    pub vibrator_query_fails: bool,
    pub vibrate_fails: bool,
    pub insets: Result<Option<SafeAreaInsets>>,
    pub build_fails: bool,
    pub ui_mode: UiMode,
    pub vibrations: Mutex<Vec<Vibration>>,
    pub ui_posts: AtomicUsize,
}

impl FakePlatform {
    /// A modern device with a vibrator and a status/navigation bar.
    pub fn capable() -> Self {
        Self {
            sdk_int: 34,
            sdk_fails: false,
            has_vibrator: true,
            vibrator_query_fails: false,
            vibrate_fails: false,
            insets: Ok(Some(SafeAreaInsets {
                top: 24,
                right: 0,
                bottom: 48,
                left: 0,
            })),
            build_fails: false,
            ui_mode: UiMode::Thread,
            vibrations: Mutex::new(Vec::new()),
            ui_posts: AtomicUsize::new(0),
        }
    }

    pub fn recorded(&self) -> Vec<Vibration> {
        self.vibrations.lock().unwrap().clone()
    }

    pub fn ui_post_count(&self) -> usize {
        self.ui_posts.load(Ordering::SeqCst)
    }
}

impl PlatformServices for FakePlatform {
    fn platform_name(&self) -> &str {
        "Fake"
    }
}

impl Vibrator for FakePlatform {
    fn has_vibrator(&self) -> Result<bool> {
        if self.vibrator_query_fails {
            return Err(StrataError::Bridge("getSystemService: SecurityException".into()));
        }
        Ok(self.has_vibrator)
    }

    fn vibrate(&self, vibration: Vibration) -> Result<()> {
        if self.vibrate_fails {
            return Err(StrataError::Bridge("vibrator busy".into()));
        }
        self.vibrations.lock().unwrap().push(vibration);
        Ok(())
    }
}

impl WindowInsets for FakePlatform {
    fn system_bar_insets(&self) -> Result<Option<SafeAreaInsets>> {
        match &self.insets {
            Ok(insets) => Ok(*insets),
            Err(_) => Err(StrataError::PlatformUnavailable),
        }
    }
}

impl BuildInfo for FakePlatform {
    fn model(&self) -> Result<String> {
        if self.build_fails {
            return Err(StrataError::PlatformUnavailable);
        }
        Ok("Pixel 8".into())
    }

    fn os_version(&self) -> Result<String> {
        if self.build_fails {
            return Err(StrataError::PlatformUnavailable);
        }
        Ok("14".into())
    }

    fn sdk_int(&self) -> Result<i32> {
        if self.sdk_fails {
            return Err(StrataError::Bridge("SDK_INT: Java exception cleared".into()));
        }
        Ok(self.sdk_int)
    }
}

impl UiThread for FakePlatform {
    fn run_on_ui_thread(&self, task: UiTask) -> Result<()> {
        self.ui_posts.fetch_add(1, Ordering::SeqCst);
        match self.ui_mode {
            UiMode::Thread => {
                std::thread::spawn(task);
                Ok(())
            }
            UiMode::Refuse => Err(StrataError::Bridge("activity destroyed".into())),
            UiMode::Drop => {
                drop(task);
                Ok(())
            }
        }
    }
}
