// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Strata Contributors
//
// JNI exports for `com.jbcom.plugins.strata.StrataNative`.
//
// `nativeInit` registers the host context and builds the shared
// `NativeHost`; `nativeInvoke` runs one capability and returns its JSON.
// Neither lets a panic or a pending exception of ours escape into Java:
// failures come back as `false` or as a freshly thrown Java exception.

#![cfg(target_os = "android")]

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::OnceLock;

use jni::JNIEnv;
use jni::objects::{JClass, JObject, JString};
use jni::sys::{JNI_FALSE, JNI_TRUE, jboolean, jstring};

use strata_bridge::host::settle;
use strata_core::error::{Result, StrataError};

use crate::logging::init_logging;
use crate::native::NativeHost;

static NATIVE: OnceLock<NativeHost> = OnceLock::new();

fn read_string(env: &mut JNIEnv<'_>, value: &JString<'_>) -> Result<String> {
    if value.is_null() {
        return Ok(String::new());
    }
    let outcome = env.get_string(value).map(String::from);
    settle(env, "get_string", outcome)
}

fn init(env: &mut JNIEnv<'_>, activity: &JObject<'_>, config: &JString<'_>) -> Result<()> {
    let config = NativeHost::parse_config(&read_string(env, config)?)?;
    init_logging(&config);
    strata_bridge::android::register_host(env, activity)?;

    if NATIVE.get().is_none() {
        let host = NativeHost::new(strata_bridge::platform_services(), config)?;
        // A concurrent init may have won; its host is equivalent.
        let _ = NATIVE.set(host);
    }
    Ok(())
}

fn invoke(env: &mut JNIEnv<'_>, method: &JString<'_>, params: &JString<'_>) -> Result<String> {
    let host = NATIVE
        .get()
        .ok_or_else(|| StrataError::Bridge("nativeInit has not been called".into()))?;
    let method = read_string(env, method)?;
    let params = read_string(env, params)?;
    host.invoke_blocking(&method, &params)
}

/// `static native boolean nativeInit(Activity activity, String configJson)`
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_jbcom_plugins_strata_StrataNative_nativeInit<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    activity: JObject<'local>,
    config: JString<'local>,
) -> jboolean {
    match catch_unwind(AssertUnwindSafe(|| init(&mut env, &activity, &config))) {
        Ok(Ok(())) => JNI_TRUE,
        Ok(Err(e)) => {
            tracing::error!("Strata init failed: {e}");
            JNI_FALSE
        }
        Err(_) => {
            tracing::error!("Strata init panicked");
            JNI_FALSE
        }
    }
}

/// `static native String nativeInvoke(String method, String paramsJson)`
///
/// Returns the response JSON (`"null"` for an acknowledgement). Throws
/// `IllegalArgumentException` for an unknown method or malformed params and
/// `IllegalStateException` for anything else.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_jbcom_plugins_strata_StrataNative_nativeInvoke<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    method: JString<'local>,
    params: JString<'local>,
) -> jstring {
    let outcome = catch_unwind(AssertUnwindSafe(|| invoke(&mut env, &method, &params)));

    let (class, message) = match outcome {
        Ok(Ok(json)) => match env.new_string(json) {
            Ok(out) => return out.into_raw(),
            Err(e) => {
                let _ = env.exception_clear();
                ("java/lang/IllegalStateException", format!("new_string: {e}"))
            }
        },
        Ok(Err(e @ (StrataError::UnknownCapability(_) | StrataError::Serialization(_)))) => {
            ("java/lang/IllegalArgumentException", e.to_string())
        }
        Ok(Err(e)) => ("java/lang/IllegalStateException", e.to_string()),
        Err(_) => (
            "java/lang/IllegalStateException",
            "Strata plugin panicked".to_string(),
        ),
    };

    let _ = env.throw_new(class, message);
    std::ptr::null_mut()
}
