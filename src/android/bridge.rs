//! Entry points for the Java activity that owns the window, e.g. a hybrid-app bridge activity.
//!
//! The activity calls its `super` implementation first, then forwards to these:
//!
//! ```java
//! private static native void nativeOnCreate(Activity activity);
//! private static native void nativeOnWindowFocusChanged(Activity activity, boolean hasFocus);
//! ```
//!
//! The framework delivers both callbacks on the UI thread, the only thread allowed to touch the
//! window's views.

use super::{
    host::JniWindowHost,
    utils::{
        application_context::{get_application_context, ApplicationContext},
        logging,
    },
};
use crate::core::{config::parse_config, logging::BestEffort};
use crate::display::controller::{ImmersiveDisplayController, LifecycleObserver};
use crate::display::host::WindowHost;
use jni::{
    objects::{JClass, JObject},
    sys::{jboolean, JNI_FALSE},
    JNIEnv,
};

/// Resolves the app directories, loads `display.toml` and installs the logger.
fn bootstrap(env: &mut JNIEnv, activity: &JObject) {
    let context_result = ApplicationContext::build(env, activity);
    if context_result.is_err() {
        let _ = env.exception_clear();
    }

    let config = get_application_context()
        .map(|context| parse_config(&context.config_path()))
        .unwrap_or_default();
    logging::init(&config);

    // Reported late, there is no logger before this point
    context_result.best_effort("resolve application directories");
}

fn created<H: WindowHost>(host: &mut H) {
    ImmersiveDisplayController::new().on_created(host);
}

fn window_focus_changed<H: WindowHost>(host: &mut H, has_focus: jboolean) {
    ImmersiveDisplayController::new().on_focus_changed(host, has_focus != JNI_FALSE);
}

#[no_mangle]
pub extern "system" fn Java_com_prayertime_display_MainActivity_nativeOnCreate<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    activity: JObject<'local>,
) {
    bootstrap(&mut env, &activity);
    created(&mut JniWindowHost::new(&mut env, &activity));
}

#[no_mangle]
pub extern "system" fn Java_com_prayertime_display_MainActivity_nativeOnWindowFocusChanged<
    'local,
>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    activity: JObject<'local>,
    has_focus: jboolean,
) {
    window_focus_changed(&mut JniWindowHost::new(&mut env, &activity), has_focus);
}
