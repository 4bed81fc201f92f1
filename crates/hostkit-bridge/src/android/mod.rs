// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Each trait method invokes the corresponding
// Android API through JNI calls into the ART runtime.
//
// ## Threading
//
// `Window.addFlags` / `clearFlags` must run on the Activity's UI thread.
// The facade never calls `set_keep_screen_on` directly; it submits the call
// to the host-provided `UiExecutor`, which on Android is expected to post to
// the UI thread. Any Java exception raised by a call is cleared before
// returning so a failed call cannot poison later JNI use on that thread.

#![cfg(target_os = "android")]

use std::sync::OnceLock;
use std::time::Duration;

use jni::objects::{GlobalRef, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};

use hostkit_core::OsVersion;
use hostkit_core::error::{HostkitError, Result};

use crate::permissions::legacy_storage_permissions_apply;
use crate::traits::*;

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// `WindowManager.LayoutParams.FLAG_KEEP_SCREEN_ON`.
const FLAG_KEEP_SCREEN_ON: i32 = 128;

/// `PackageManager.PERMISSION_GRANTED`.
const PERMISSION_GRANTED: i32 = 0;

const STORAGE_PERMISSIONS: [&str; 2] = [
    "android.permission.READ_EXTERNAL_STORAGE",
    "android.permission.WRITE_EXTERNAL_STORAGE",
];

/// Request code for the storage permission prompt. The host Activity sees
/// it in `onRequestPermissionsResult`.
pub const REQUEST_STORAGE_PERMISSIONS: i32 = 0x484B; // "HK"

/// Local references a single bridge call may create before the frame grows.
const LOCAL_FRAME_CAPACITY: i32 = 16;

static JAVA_VM: OnceLock<JavaVM> = OnceLock::new();

/// The process-wide `JavaVM`, wrapped once from the NDK context.
fn java_vm() -> Result<&'static JavaVM> {
    if let Some(vm) = JAVA_VM.get() {
        return Ok(vm);
    }
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| jni_err("failed to obtain JavaVM", e))?;
    Ok(JAVA_VM.get_or_init(|| vm))
}

/// Obtain a [`JNIEnv`] for the current thread, attaching it if needed.
///
/// Threads stay attached until they exit, which suits the executor's
/// long-lived pool threads.
fn jni_env() -> Result<JNIEnv<'static>> {
    java_vm()?
        .attach_current_thread_permanently()
        .map_err(|e| jni_err("failed to attach JNI thread", e))
}

/// Obtain the current Android `Activity` as a [`JObject`].
fn activity() -> Result<JObject<'static>> {
    let ctx = ndk_context::android_context();
    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(HostkitError::Bridge(
            "Android context is null, native activity not initialised".into(),
        ));
    }
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the hosting Activity.
    Ok(unsafe { JObject::from_raw(ptr.cast()) })
}

/// Convenience: map any `jni::errors::Error` into `HostkitError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> HostkitError {
    HostkitError::Bridge(format!("{context}: {e}"))
}

/// Carries a bridge error out of a JNI local frame.
struct FrameError(HostkitError);

impl From<jni::errors::Error> for FrameError {
    fn from(e: jni::errors::Error) -> Self {
        Self(jni_err("local frame", e))
    }
}

/// Run `f` inside a fresh local reference frame.
///
/// Threads are attached permanently and never return to Java, so local
/// references would otherwise live until the thread exits. Every local
/// created by `f` is released when the frame pops; `f` must return only
/// owned or global values.
fn in_local_frame<T>(
    env: &mut JNIEnv<'_>,
    f: impl FnOnce(&mut JNIEnv<'_>) -> Result<T>,
) -> Result<T> {
    env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| f(env).map_err(FrameError))
        .map_err(|FrameError(e)| e)
}

/// Clear any pending Java exception left behind by a failed call.
fn settle<T>(env: &mut JNIEnv<'_>, result: Result<T>) -> Result<T> {
    if result.is_err() && env.exception_check().unwrap_or(false) {
        if let Err(e) = env.exception_clear() {
            tracing::warn!(error = %e, "failed to clear pending Java exception");
        }
    }
    result
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// Android implementation of the Hostkit platform bridge.
///
/// Holds a global reference to the `Vibrator` system service when one was
/// available at construction; dropping the bridge releases it.
pub struct AndroidBridge {
    vibrator: Option<GlobalRef>,
    os: OsVersion,
    /// `Build.VERSION.SDK_INT`, when it could be read.
    sdk_int: Option<i32>,
}

impl AndroidBridge {
    /// Create a new Android bridge.
    ///
    /// Looks up the vibrator service and the OS release once. Neither lookup
    /// can fail construction; a failure leaves that capability absent.
    pub fn new() -> Self {
        let vibrator = match acquire_vibrator() {
            Ok(Some(service)) => {
                tracing::info!("vibrator available and initialised");
                Some(service)
            }
            Ok(None) => {
                tracing::warn!("vibrator not available");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Android vibrator service unavailable");
                None
            }
        };

        let os = match query_release() {
            Ok(release) => OsVersion::parse("Android", &release),
            Err(e) => {
                tracing::warn!(error = %e, "Build.VERSION.RELEASE unavailable");
                OsVersion {
                    name: "Android".into(),
                    ..OsVersion::unknown()
                }
            }
        };

        let sdk_int = match query_sdk_int() {
            Ok(level) => Some(level),
            Err(e) => {
                tracing::warn!(error = %e, "Build.VERSION.SDK_INT unavailable");
                None
            }
        };

        Self {
            vibrator,
            os,
            sdk_int,
        }
    }
}

impl Default for AndroidBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

// ---------------------------------------------------------------------------
// NativeHaptics — android.os.Vibrator
// ---------------------------------------------------------------------------

impl NativeHaptics for AndroidBridge {
    fn has_vibrator(&self) -> bool {
        self.vibrator.is_some()
    }

    /// Call `Vibrator.vibrate(long)`. A no-op without a vibrator.
    fn vibrate(&self, duration: Duration) -> Result<()> {
        let Some(vibrator) = &self.vibrator else {
            return Ok(());
        };
        let mut env = jni_env()?;
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        let result = env
            .call_method(vibrator, "vibrate", "(J)V", &[JValue::Long(millis)])
            .map(drop)
            .map_err(|e| jni_err("Vibrator.vibrate", e));
        settle(&mut env, result)
    }
}

/// `context.getApplicationContext().getSystemService("vibrator")`, kept only
/// when `hasVibrator()` reports hardware.
fn acquire_vibrator() -> Result<Option<GlobalRef>> {
    let mut env = jni_env()?;
    let activity = activity()?;
    let result = in_local_frame(&mut env, |env| lookup_vibrator(env, &activity));
    settle(&mut env, result)
}

fn lookup_vibrator(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Result<Option<GlobalRef>> {
    let app_ctx: JObject = env
        .call_method(
            activity,
            "getApplicationContext",
            "()Landroid/content/Context;",
            &[],
        )
        .map_err(|e| jni_err("getApplicationContext", e))?
        .l()
        .map_err(|e| jni_err("getApplicationContext->l", e))?;

    let j_name: JString = env
        .new_string("vibrator")
        .map_err(|e| jni_err("new_string(vibrator)", e))?;

    let service: JObject = env
        .call_method(
            &app_ctx,
            "getSystemService",
            "(Ljava/lang/String;)Ljava/lang/Object;",
            &[JValue::Object(&j_name)],
        )
        .map_err(|e| jni_err("getSystemService", e))?
        .l()
        .map_err(|e| jni_err("getSystemService->l", e))?;

    if service.is_null() {
        return Ok(None);
    }

    let has_vibrator = env
        .call_method(&service, "hasVibrator", "()Z", &[])
        .map_err(|e| jni_err("Vibrator.hasVibrator", e))?
        .z()
        .map_err(|e| jni_err("hasVibrator->z", e))?;

    if !has_vibrator {
        return Ok(None);
    }

    env.new_global_ref(&service)
        .map(Some)
        .map_err(|e| jni_err("new_global_ref(vibrator)", e))
}

// ---------------------------------------------------------------------------
// NativeScreen — Window.addFlags / clearFlags
// ---------------------------------------------------------------------------

impl NativeScreen for AndroidBridge {
    fn set_keep_screen_on(&self, on: bool) -> Result<()> {
        let mut env = jni_env()?;
        let activity = activity()?;
        let result = in_local_frame(&mut env, |env| apply_keep_screen_on(env, &activity, on));
        settle(&mut env, result)
    }
}

fn apply_keep_screen_on(env: &mut JNIEnv<'_>, activity: &JObject<'_>, on: bool) -> Result<()> {
    let window: JObject = env
        .call_method(activity, "getWindow", "()Landroid/view/Window;", &[])
        .map_err(|e| jni_err("getWindow", e))?
        .l()
        .map_err(|e| jni_err("getWindow->l", e))?;

    if window.is_null() {
        return Err(HostkitError::Bridge("activity has no window".into()));
    }

    let method = if on { "addFlags" } else { "clearFlags" };
    env.call_method(&window, method, "(I)V", &[JValue::Int(FLAG_KEEP_SCREEN_ON)])
        .map_err(|e| jni_err(method, e))?;

    tracing::debug!(on, "Android: keep-screen-on flag updated");
    Ok(())
}

// ---------------------------------------------------------------------------
// NativeStorage — Activity.checkSelfPermission / requestPermissions
// ---------------------------------------------------------------------------

impl NativeStorage for AndroidBridge {
    /// Report whether both storage permissions are granted.
    ///
    /// When either is denied a permission prompt is dispatched with
    /// [`REQUEST_STORAGE_PERMISSIONS`] and `false` is returned; the user's
    /// answer is visible to the next call.
    ///
    /// From API 33 the system always reports the legacy storage permissions
    /// as denied and never shows the prompt, so they are reported granted
    /// there. An unreadable API level is treated as legacy.
    fn storage_permissions_granted(&self) -> Result<bool> {
        if let Some(level) = self.sdk_int {
            if !legacy_storage_permissions_apply(level) {
                tracing::debug!(sdk_int = level, "legacy storage permissions retired");
                return Ok(true);
            }
        }
        let mut env = jni_env()?;
        let activity = activity()?;
        let result = in_local_frame(&mut env, |env| check_storage_permissions(env, &activity));
        settle(&mut env, result)
    }
}

fn check_storage_permissions(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Result<bool> {
    let mut all_granted = true;
    for permission in STORAGE_PERMISSIONS {
        let j_perm: JString = env
            .new_string(permission)
            .map_err(|e| jni_err("new_string(permission)", e))?;
        let status = env
            .call_method(
                activity,
                "checkSelfPermission",
                "(Ljava/lang/String;)I",
                &[JValue::Object(&j_perm)],
            )
            .map_err(|e| jni_err("checkSelfPermission", e))?
            .i()
            .map_err(|e| jni_err("checkSelfPermission->i", e))?;
        if status != PERMISSION_GRANTED {
            tracing::info!(permission, "storage permission denied");
            all_granted = false;
        }
    }

    if all_granted {
        return Ok(true);
    }

    let request = env
        .new_object_array(
            STORAGE_PERMISSIONS.len() as i32,
            "java/lang/String",
            JObject::null(),
        )
        .map_err(|e| jni_err("new_object_array(String)", e))?;
    for (index, permission) in STORAGE_PERMISSIONS.iter().enumerate() {
        let j_perm: JString = env
            .new_string(permission)
            .map_err(|e| jni_err("new_string(permission)", e))?;
        env.set_object_array_element(&request, index as i32, &j_perm)
            .map_err(|e| jni_err("set_object_array_element", e))?;
    }

    env.call_method(
        activity,
        "requestPermissions",
        "([Ljava/lang/String;I)V",
        &[
            JValue::Object(&request),
            JValue::Int(REQUEST_STORAGE_PERMISSIONS),
        ],
    )
    .map_err(|e| jni_err("requestPermissions", e))?;

    tracing::info!("Android: storage permission request dispatched");
    Ok(false)
}

// ---------------------------------------------------------------------------
// NativeOsInfo — android.os.Build.VERSION.RELEASE
// ---------------------------------------------------------------------------

impl NativeOsInfo for AndroidBridge {
    fn os_version(&self) -> OsVersion {
        self.os.clone()
    }
}

fn query_release() -> Result<String> {
    let mut env = jni_env()?;
    let result = in_local_frame(&mut env, read_release);
    settle(&mut env, result)
}

fn query_sdk_int() -> Result<i32> {
    let mut env = jni_env()?;
    let result = in_local_frame(&mut env, |env| {
        env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
            .map_err(|e| jni_err("Build.VERSION.SDK_INT", e))?
            .i()
            .map_err(|e| jni_err("SDK_INT->i", e))
    });
    settle(&mut env, result)
}

fn read_release(env: &mut JNIEnv<'_>) -> Result<String> {
    let value: JObject = env
        .get_static_field("android/os/Build$VERSION", "RELEASE", "Ljava/lang/String;")
        .map_err(|e| jni_err("Build.VERSION.RELEASE", e))?
        .l()
        .map_err(|e| jni_err("RELEASE->l", e))?;
    let release = JString::from(value);
    let text: String = env
        .get_string(&release)
        .map_err(|e| jni_err("get_string(RELEASE)", e))?
        .into();
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_errors_surface_as_bridge_errors() {
        let FrameError(err) = FrameError::from(jni::errors::Error::NullPtr("window"));
        assert!(matches!(err, HostkitError::Bridge(ref msg) if msg.starts_with("local frame")));
    }

    #[test]
    fn storage_request_code_fits_sixteen_bits() {
        // Fragment-hosting activities reject codes above 0xFFFF.
        assert!((1..=0xFFFF).contains(&REQUEST_STORAGE_PERMISSIONS));
    }
}
