//! What the controller needs from the window that hosts it.
//!
//! On a device these are JNI calls into `android.view.Window`; in tests they are mocks.

use crate::core::flags::{InsetsTypes, SystemBarsBehavior, SystemUiFlags};

#[cfg(test)]
use mockall::automock;

pub type HostResult<T> = Result<T, Box<dyn std::error::Error>>;

#[cfg_attr(test, automock)]
pub trait InsetsController {
    fn hide(&mut self, types: InsetsTypes) -> HostResult<()>;

    fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior) -> HostResult<()>;
}

#[cfg_attr(test, automock(type Controller = MockInsetsController;))]
pub trait WindowHost {
    type Controller: InsetsController;

    /// Sets `FLAG_KEEP_SCREEN_ON` on the window. Cleared by the OS with the window itself.
    fn add_keep_screen_on(&mut self) -> HostResult<()>;

    /// Whether the running OS exposes `Window.getInsetsController()`.
    fn supports_insets_controller(&mut self) -> HostResult<bool>;

    fn set_decor_fits_system_windows(&mut self, fits: bool) -> HostResult<()>;

    /// `None` while the window is not attached yet.
    fn insets_controller(&mut self) -> HostResult<Option<Self::Controller>>;

    /// Sets the visibility flag word on the decor view.
    fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> HostResult<()>;
}
