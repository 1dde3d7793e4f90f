use super::host::WindowHost;
use super::strategy::{ChromeStrategy, SelectedStrategy};
use crate::core::logging::BestEffort;

/// Hooks the host runtime calls on its UI thread, after its own handling of the same event.
pub trait LifecycleObserver<H: WindowHost> {
    fn on_created(&self, host: &mut H);

    fn on_focus_changed(&self, host: &mut H, has_focus: bool);
}

/// Keeps the screen on and the system bars hidden.
///
/// Holds no state: every call issues its commands again, so calls can repeat in any order and
/// still leave the bars hidden.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmersiveDisplayController;

impl ImmersiveDisplayController {
    pub fn new() -> Self {
        Self
    }

    pub fn apply_immersive_mode<H: WindowHost>(&self, host: &mut H) {
        let strategy = SelectedStrategy::detect(host);
        log::debug!("Hiding system bars with {}", strategy.name());
        strategy.hide_system_bars(host);
    }
}

impl<H: WindowHost> LifecycleObserver<H> for ImmersiveDisplayController {
    fn on_created(&self, host: &mut H) {
        host.add_keep_screen_on().best_effort("keep the screen on");
        self.apply_immersive_mode(host);
    }

    fn on_focus_changed(&self, host: &mut H, has_focus: bool) {
        // Bars may show while unfocused, they are hidden again on the way back
        if has_focus {
            self.apply_immersive_mode(host);
        }
    }
}
