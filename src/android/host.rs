use crate::core::flags::{
    has_insets_controller, InsetsTypes, SystemBarsBehavior, SystemUiFlags, WindowFlags,
};
use crate::display::host::{HostResult, InsetsController, WindowHost};
use jni::objects::{JObject, JValue};
use jni::JNIEnv;

#[cfg(test)]
use mockall::automock;

/// The thrown-exception slot of a JNI environment.
#[cfg_attr(test, automock)]
pub trait PendingException {
    fn is_pending(&mut self) -> bool;

    /// Prints the exception to logcat and clears it.
    fn describe_and_clear(&mut self);
}

impl PendingException for JNIEnv<'_> {
    fn is_pending(&mut self) -> bool {
        self.exception_check().unwrap_or(false)
    }

    fn describe_and_clear(&mut self) {
        let _ = self.exception_describe();
        let _ = self.exception_clear();
    }
}

/// A pending Java exception makes every later JNI call fail, so it is cleared before the error is
/// handed back.
fn check<E, T>(env: &mut E, result: jni::errors::Result<T>) -> HostResult<T>
where
    E: PendingException + ?Sized,
{
    if result.is_err() && env.is_pending() {
        env.describe_and_clear();
    }
    result.map_err(Into::into)
}

/// `android.view.Window` of an activity, reached through JNI.
pub struct JniWindowHost<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
    activity: &'a JObject<'local>,
}

impl<'a, 'local> JniWindowHost<'a, 'local> {
    pub fn new(env: &'a mut JNIEnv<'local>, activity: &'a JObject<'local>) -> Self {
        Self { env, activity }
    }

    fn window(&mut self) -> HostResult<JObject<'local>> {
        let result = self
            .env
            .call_method(self.activity, "getWindow", "()Landroid/view/Window;", &[])
            .and_then(|window| window.l());
        let window = check(&mut *self.env, result)?;
        if window.is_null() {
            return Err("activity has no window".into());
        }
        Ok(window)
    }

    fn call_on_window(&mut self, name: &str, sig: &str, args: &[JValue]) -> HostResult<()> {
        let window = self.window()?;
        let result = self.env.call_method(&window, name, sig, args).map(|_| ());
        check(&mut *self.env, result)
    }
}

impl<'a, 'local> WindowHost for JniWindowHost<'a, 'local> {
    type Controller = JniInsetsController<'local>;

    fn add_keep_screen_on(&mut self) -> HostResult<()> {
        self.call_on_window(
            "addFlags",
            "(I)V",
            &[JValue::Int(WindowFlags::KEEP_SCREEN_ON.bits())],
        )
    }

    fn supports_insets_controller(&mut self) -> HostResult<bool> {
        let result = self
            .env
            .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
            .and_then(|sdk_int| sdk_int.i());
        let sdk_int = check(&mut *self.env, result)?;
        log::trace!("Running on API level {}", sdk_int);
        Ok(has_insets_controller(sdk_int))
    }

    fn set_decor_fits_system_windows(&mut self, fits: bool) -> HostResult<()> {
        self.call_on_window(
            "setDecorFitsSystemWindows",
            "(Z)V",
            &[JValue::Bool(fits.into())],
        )
    }

    fn insets_controller(&mut self) -> HostResult<Option<Self::Controller>> {
        let window = self.window()?;
        let result = self
            .env
            .call_method(
                &window,
                "getInsetsController",
                "()Landroid/view/WindowInsetsController;",
                &[],
            )
            .and_then(|controller| controller.l());
        let controller = check(&mut *self.env, result)?;
        if controller.is_null() {
            return Ok(None);
        }

        // Same thread, same frame: the controller only lives as long as the host's references
        let env = unsafe { self.env.unsafe_clone() };
        Ok(Some(JniInsetsController { env, controller }))
    }

    fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> HostResult<()> {
        let window = self.window()?;
        let result = self
            .env
            .call_method(&window, "getDecorView", "()Landroid/view/View;", &[])
            .and_then(|decor_view| decor_view.l());
        let decor_view = check(&mut *self.env, result)?;

        let result = self
            .env
            .call_method(
                &decor_view,
                "setSystemUiVisibility",
                "(I)V",
                &[JValue::Int(flags.bits())],
            )
            .map(|_| ());
        check(&mut *self.env, result)
    }
}

/// `android.view.WindowInsetsController` of the host window.
pub struct JniInsetsController<'local> {
    env: JNIEnv<'local>,
    controller: JObject<'local>,
}

impl<'local> InsetsController for JniInsetsController<'local> {
    fn hide(&mut self, types: InsetsTypes) -> HostResult<()> {
        let result = self
            .env
            .call_method(
                &self.controller,
                "hide",
                "(I)V",
                &[JValue::Int(types.bits())],
            )
            .map(|_| ());
        check(&mut self.env, result)
    }

    fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior) -> HostResult<()> {
        let result = self
            .env
            .call_method(
                &self.controller,
                "setSystemBarsBehavior",
                "(I)V",
                &[JValue::Int(behavior.value())],
            )
            .map(|_| ());
        check(&mut self.env, result)
    }
}
