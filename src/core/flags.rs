//! Platform constants passed to the host window.
//!
//! The values mirror the Android framework constants of the same name. They are part of the
//! platform ABI, so we keep them here instead of reading them back through JNI on every call.

use bitflags::bitflags;

/// First API level (Android 11, "R") exposing `Window.getInsetsController()`.
pub const INSETS_CONTROLLER_API_LEVEL: i32 = 30;

pub const fn has_insets_controller(api_level: i32) -> bool {
    api_level >= INSETS_CONTROLLER_API_LEVEL
}

bitflags! {
    /// `WindowManager.LayoutParams` flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: i32 {
        const KEEP_SCREEN_ON = 0x0000_0080;
    }
}

bitflags! {
    /// `WindowInsets.Type` masks accepted by `WindowInsetsController.hide`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InsetsTypes: i32 {
        const STATUS_BARS = 1 << 0;
        const NAVIGATION_BARS = 1 << 1;
    }
}

impl InsetsTypes {
    /// Hidden together in immersive mode. Narrower than `WindowInsets.Type.systemBars()`, which
    /// also covers the caption bar.
    pub const fn status_and_navigation_bars() -> Self {
        Self::STATUS_BARS.union(Self::NAVIGATION_BARS)
    }
}

bitflags! {
    /// `View.SYSTEM_UI_FLAG_*` visibility flags for the decor view on systems without an insets
    /// controller.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SystemUiFlags: i32 {
        const HIDE_NAVIGATION = 0x0000_0002;
        const FULLSCREEN = 0x0000_0004;
        const LAYOUT_STABLE = 0x0000_0100;
        const LAYOUT_HIDE_NAVIGATION = 0x0000_0200;
        const LAYOUT_FULLSCREEN = 0x0000_0400;
        const IMMERSIVE_STICKY = 0x0000_1000;
    }
}

impl SystemUiFlags {
    /// Sticky immersive mode with the content laid out behind both bars.
    pub const fn immersive_sticky_fullscreen() -> Self {
        Self::IMMERSIVE_STICKY
            .union(Self::FULLSCREEN)
            .union(Self::HIDE_NAVIGATION)
            .union(Self::LAYOUT_STABLE)
            .union(Self::LAYOUT_FULLSCREEN)
            .union(Self::LAYOUT_HIDE_NAVIGATION)
    }
}

/// `WindowInsetsController.BEHAVIOR_*` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemBarsBehavior {
    /// Hidden bars come back on a swipe and hide again on their own.
    ShowTransientBarsBySwipe,
}

impl SystemBarsBehavior {
    pub const fn value(self) -> i32 {
        match self {
            SystemBarsBehavior::ShowTransientBarsBySwipe => 2,
        }
    }
}
