// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// Android platform services via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Each trait method invokes the corresponding
// Android API through JNI calls into the ART runtime.
//
// ## UI thread hop
//
// `Activity.runOnUiThread` takes a `java.lang.Runnable`, which native code
// cannot implement directly. `android/StrataRunnable.java` (shipped next to
// this crate) is a tiny `Runnable` holding a `long` handle to a boxed
// `UiTask`; its `run()` calls back into
// `Java_com_jbcom_plugins_strata_StrataRunnable_nativeRun` below, which
// reclaims the box and runs the task exactly once.
//
// ## Host contract
//
// The host must call `StrataNative.nativeInit(activity, config)` once, from
// `Plugin.load()`, before any capability is invoked. That registers the
// `JavaVM*` and a global reference to the Activity in `host::HOST` (and in
// `ndk-context`, for other crates in the same library). Until then every
// service returns `StrataError::Bridge`.
//
// Every JNI call goes through `jcall`, which clears a Java exception left
// pending by the call before reporting the error. The handlers swallow
// those errors, so nothing may rethrow into the host when the native frame
// returns.
//
// `FindClass` for app classes (the runnable, androidx) only resolves against
// the app class loader, so these services must be called from a thread the
// JVM started (the plugin call thread or the UI thread), not from a bare
// native thread.

#![cfg(target_os = "android")]

use jni::objects::{JClass, JObject, JString, JValue};
use jni::sys::jlong;
use jni::{JNIEnv, JavaVM};

use strata_core::error::{Result, StrataError};
use strata_core::types::SafeAreaInsets;

use crate::host::{HOST, HostContext, PendingException, run_contained, settle};
use crate::traits::*;

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// `VibrationEffect.DEFAULT_AMPLITUDE`.
const DEFAULT_AMPLITUDE: i32 = -1;

/// Java shim implementing `Runnable` over a native task handle.
const RUNNABLE_CLASS: &str = "com/jbcom/plugins/strata/StrataRunnable";

impl PendingException for JNIEnv<'_> {
    fn exception_pending(&mut self) -> bool {
        self.exception_check().unwrap_or(false)
    }

    fn clear_exception(&mut self) {
        let _ = self.exception_clear();
    }
}

/// Run one JNI call, clearing any Java exception it leaves pending.
fn jcall<'local, T>(
    env: &mut JNIEnv<'local>,
    context: &str,
    call: impl FnOnce(&mut JNIEnv<'local>) -> jni::errors::Result<T>,
) -> Result<T> {
    let outcome = call(env);
    settle(env, context, outcome)
}

/// Register the host's `JavaVM*` and Activity. Idempotent: returns `false`
/// if a context was already registered.
pub fn register_host(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Result<bool> {
    let vm = jcall(env, "get_java_vm", |env| env.get_java_vm())?;
    let global = jcall(env, "new_global_ref(activity)", |env| env.new_global_ref(activity))?;
    let ctx = HostContext::new(
        vm.get_java_vm_pointer().cast(),
        global.as_obj().as_raw().cast(),
    );

    if !HOST.register(ctx) {
        tracing::debug!("Android: host context already registered");
        return Ok(false);
    }

    // The registered Activity reference lives for the rest of the process.
    std::mem::forget(global);
    // SAFETY: both pointers are valid for the process lifetime (the VM is
    // never unloaded, the global ref is leaked above), and `HOST.register`
    // succeeding means this is the only initialisation.
    unsafe { ndk_context::initialize_android_context(ctx.vm(), ctx.activity()) };
    tracing::info!("Android: host context registered");
    Ok(true)
}

/// Run `f` with a [`JNIEnv`] attached to the current thread.
fn with_env<T>(f: impl FnOnce(&mut JNIEnv<'_>) -> Result<T>) -> Result<T> {
    let ctx = HOST.get()?;
    // SAFETY: the pointer was registered by `register_host` from a live VM
    // and stays valid for the lifetime of the process.
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| StrataError::Bridge(format!("JavaVM::from_raw: {e}")))?;
    let mut guard = vm
        .attach_current_thread()
        .map_err(|e| StrataError::Bridge(format!("attach_current_thread: {e}")))?;
    f(&mut guard)
}

/// The hosting `Activity` as a [`JObject`].
fn activity() -> Result<JObject<'static>> {
    let ctx = HOST.get()?;
    // SAFETY: `register_host` leaked a global reference to the Activity; it
    // outlives every call made through this module.
    Ok(unsafe { JObject::from_raw(ctx.activity().cast()) })
}

/// Read a static `String` field such as `Build.MODEL`.
fn static_string(env: &mut JNIEnv<'_>, class: &str, field: &str) -> Result<String> {
    let value = jcall(env, field, |env| {
        env.get_static_field(class, field, "Ljava/lang/String;")?.l()
    })?;
    if value.is_null() {
        return Err(StrataError::Bridge(format!("{class}.{field} is null")));
    }
    let value = JString::from(value);
    jcall(env, "get_string", |env| Ok(env.get_string(&value)?.into()))
}

/// `context.getSystemService("vibrator")`, or `None` if the service is absent.
fn vibrator_service<'local>(
    env: &mut JNIEnv<'local>,
    activity: &JObject<'_>,
) -> Result<Option<JObject<'local>>> {
    let service = jcall(env, "getSystemService(vibrator)", |env| {
        let name = env.new_string("vibrator")?;
        env.call_method(
            activity,
            "getSystemService",
            "(Ljava/lang/String;)Ljava/lang/Object;",
            &[JValue::Object(&name)],
        )?
        .l()
    })?;
    Ok((!service.is_null()).then_some(service))
}

fn int_field(env: &mut JNIEnv<'_>, obj: &JObject<'_>, name: &str) -> Result<i32> {
    jcall(env, name, |env| env.get_field(obj, name, "I")?.i())
}

// ---------------------------------------------------------------------------
// Platform struct
// ---------------------------------------------------------------------------

/// Android implementation of the Strata platform services.
///
/// Zero-sized; all state lives on the Java side.
pub struct AndroidPlatform;

impl AndroidPlatform {
    /// Create the Android backend. Does not touch JNI until first use.
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformServices for AndroidPlatform {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

// ---------------------------------------------------------------------------
// Vibrator — android.os.Vibrator
// ---------------------------------------------------------------------------

impl Vibrator for AndroidPlatform {
    fn has_vibrator(&self) -> Result<bool> {
        with_env(|env| {
            let activity = activity()?;
            let Some(vibrator) = vibrator_service(env, &activity)? else {
                return Ok(false);
            };
            jcall(env, "hasVibrator", |env| {
                env.call_method(&vibrator, "hasVibrator", "()Z", &[])?.z()
            })
        })
    }

    /// Throws `SecurityException` without the VIBRATE permission; `jcall`
    /// clears it and the handler logs the error.
    fn vibrate(&self, vibration: Vibration) -> Result<()> {
        with_env(|env| {
            let activity = activity()?;
            let Some(vibrator) = vibrator_service(env, &activity)? else {
                return Err(StrataError::PlatformUnavailable);
            };

            match vibration {
                Vibration::OneShot { duration_ms } => {
                    let effect = jcall(env, "VibrationEffect.createOneShot", |env| {
                        env.call_static_method(
                            "android/os/VibrationEffect",
                            "createOneShot",
                            "(JI)Landroid/os/VibrationEffect;",
                            &[
                                JValue::Long(duration_ms as i64),
                                JValue::Int(DEFAULT_AMPLITUDE),
                            ],
                        )?
                        .l()
                    })?;

                    jcall(env, "vibrate(effect)", |env| {
                        env.call_method(
                            &vibrator,
                            "vibrate",
                            "(Landroid/os/VibrationEffect;)V",
                            &[JValue::Object(&effect)],
                        )
                    })?;
                }
                Vibration::Legacy { duration_ms } => {
                    jcall(env, "vibrate(long)", |env| {
                        env.call_method(
                            &vibrator,
                            "vibrate",
                            "(J)V",
                            &[JValue::Long(duration_ms as i64)],
                        )
                    })?;
                }
            }

            tracing::debug!(?vibration, "Android: vibration dispatched");
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// WindowInsets — androidx.core.view.WindowInsetsCompat
// ---------------------------------------------------------------------------

impl WindowInsets for AndroidPlatform {
    fn system_bar_insets(&self) -> Result<Option<SafeAreaInsets>> {
        with_env(|env| {
            let activity = activity()?;

            let root_insets = jcall(env, "getRootWindowInsets", |env| {
                let window = env
                    .call_method(&activity, "getWindow", "()Landroid/view/Window;", &[])?
                    .l()?;
                let decor_view = env
                    .call_method(&window, "getDecorView", "()Landroid/view/View;", &[])?
                    .l()?;
                env.call_method(
                    &decor_view,
                    "getRootWindowInsets",
                    "()Landroid/view/WindowInsets;",
                    &[],
                )?
                .l()
            })?;

            // Not attached to a window yet.
            if root_insets.is_null() {
                return Ok(None);
            }

            let insets = jcall(env, "WindowInsetsCompat.getInsets(systemBars)", |env| {
                let compat = env
                    .call_static_method(
                        "androidx/core/view/WindowInsetsCompat",
                        "toWindowInsetsCompat",
                        "(Landroid/view/WindowInsets;)Landroidx/core/view/WindowInsetsCompat;",
                        &[JValue::Object(&root_insets)],
                    )?
                    .l()?;
                let system_bars = env
                    .call_static_method(
                        "androidx/core/view/WindowInsetsCompat$Type",
                        "systemBars",
                        "()I",
                        &[],
                    )?
                    .i()?;
                env.call_method(
                    &compat,
                    "getInsets",
                    "(I)Landroidx/core/graphics/Insets;",
                    &[JValue::Int(system_bars)],
                )?
                .l()
            })?;

            let top = int_field(env, &insets, "top")?;
            let right = int_field(env, &insets, "right")?;
            let bottom = int_field(env, &insets, "bottom")?;
            let left = int_field(env, &insets, "left")?;

            tracing::debug!(top, right, bottom, left, "Android: system bar insets");
            Ok(Some(SafeAreaInsets::from_raw(top, right, bottom, left)))
        })
    }
}

// ---------------------------------------------------------------------------
// BuildInfo — android.os.Build
// ---------------------------------------------------------------------------

impl BuildInfo for AndroidPlatform {
    fn model(&self) -> Result<String> {
        with_env(|env| static_string(env, "android/os/Build", "MODEL"))
    }

    fn os_version(&self) -> Result<String> {
        with_env(|env| static_string(env, "android/os/Build$VERSION", "RELEASE"))
    }

    fn sdk_int(&self) -> Result<i32> {
        with_env(|env| {
            jcall(env, "SDK_INT", |env| {
                env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")?
                    .i()
            })
        })
    }
}

// ---------------------------------------------------------------------------
// UiThread — Activity.runOnUiThread
// ---------------------------------------------------------------------------

impl UiThread for AndroidPlatform {
    fn run_on_ui_thread(&self, task: UiTask) -> Result<()> {
        with_env(|env| {
            let activity = activity()?;
            let handle = Box::into_raw(Box::new(task)) as jlong;

            let posted = jcall(env, "runOnUiThread", |env| {
                let runnable = env.new_object(RUNNABLE_CLASS, "(J)V", &[JValue::Long(handle)])?;
                env.call_method(
                    &activity,
                    "runOnUiThread",
                    "(Ljava/lang/Runnable;)V",
                    &[JValue::Object(&runnable)],
                )
            });

            if let Err(e) = posted {
                // SAFETY: `handle` came from `Box::into_raw` above and the
                // runnable was never posted, so nothing else can reclaim it.
                drop(unsafe { Box::from_raw(handle as *mut UiTask) });
                return Err(e);
            }
            Ok(())
        })
    }
}

/// Entry point for `StrataRunnable.run()`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_jbcom_plugins_strata_StrataRunnable_nativeRun(
    _env: JNIEnv<'_>,
    _class: JClass<'_>,
    handle: jlong,
) {
    if handle == 0 {
        return;
    }
    // SAFETY: `handle` was produced by `Box::into_raw` in `run_on_ui_thread`
    // and the Java side zeroes its copy before calling, so it is consumed once.
    let task = unsafe { Box::from_raw(handle as *mut UiTask) };
    run_contained(*task);
}
