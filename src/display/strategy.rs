use super::host::{InsetsController, WindowHost};
use crate::core::flags::{InsetsTypes, SystemBarsBehavior, SystemUiFlags};
use crate::core::logging::BestEffort;

/// One way of hiding the system bars.
pub trait ChromeStrategy {
    fn name(&self) -> &'static str;

    /// Failures of individual host calls are logged and skipped, never returned.
    fn hide_system_bars<H: WindowHost>(&self, host: &mut H);
}

/// Android 11+: hide the bars through the window's insets controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModernInsetsStrategy {
    pub types: InsetsTypes,
    pub behavior: SystemBarsBehavior,
}

impl Default for ModernInsetsStrategy {
    fn default() -> Self {
        Self {
            types: InsetsTypes::status_and_navigation_bars(),
            behavior: SystemBarsBehavior::ShowTransientBarsBySwipe,
        }
    }
}

impl ModernInsetsStrategy {
    fn hide_with<C: InsetsController>(&self, controller: &mut C) {
        controller.hide(self.types).best_effort("hide system bars");
        controller
            .set_system_bars_behavior(self.behavior)
            .best_effort("set system bars behavior");
    }
}

impl ChromeStrategy for ModernInsetsStrategy {
    fn name(&self) -> &'static str {
        "insets controller"
    }

    fn hide_system_bars<H: WindowHost>(&self, host: &mut H) {
        host.set_decor_fits_system_windows(false)
            .best_effort("disable decor fitting system windows");

        // The controller is missing until the window is attached, the next focus gain retries
        if let Some(mut controller) = host
            .insets_controller()
            .best_effort("get insets controller")
            .flatten()
        {
            self.hide_with(&mut controller);
        }
    }
}

/// Before Android 11: set the immersive flag word on the decor view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyFlagStrategy {
    pub flags: SystemUiFlags,
}

impl Default for LegacyFlagStrategy {
    fn default() -> Self {
        Self {
            flags: SystemUiFlags::immersive_sticky_fullscreen(),
        }
    }
}

impl ChromeStrategy for LegacyFlagStrategy {
    fn name(&self) -> &'static str {
        "legacy flags"
    }

    fn hide_system_bars<H: WindowHost>(&self, host: &mut H) {
        host.set_system_ui_visibility(self.flags)
            .best_effort("set system UI visibility");
    }
}

/// The strategy picked for the running OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedStrategy {
    ModernInsets(ModernInsetsStrategy),
    LegacyFlags(LegacyFlagStrategy),
}

impl SelectedStrategy {
    pub fn for_capability(supports_insets_controller: bool) -> Self {
        if supports_insets_controller {
            SelectedStrategy::ModernInsets(ModernInsetsStrategy::default())
        } else {
            SelectedStrategy::LegacyFlags(LegacyFlagStrategy::default())
        }
    }

    /// Asks the host which capability set it has. An unanswered query counts as the older one.
    pub fn detect<H: WindowHost>(host: &mut H) -> Self {
        let supported = host
            .supports_insets_controller()
            .best_effort("query insets controller support");
        Self::for_capability(supported.unwrap_or(false))
    }
}

impl ChromeStrategy for SelectedStrategy {
    fn name(&self) -> &'static str {
        match self {
            SelectedStrategy::ModernInsets(strategy) => strategy.name(),
            SelectedStrategy::LegacyFlags(strategy) => strategy.name(),
        }
    }

    fn hide_system_bars<H: WindowHost>(&self, host: &mut H) {
        match self {
            SelectedStrategy::ModernInsets(strategy) => strategy.hide_system_bars(host),
            SelectedStrategy::LegacyFlags(strategy) => strategy.hide_system_bars(host),
        }
    }
}
