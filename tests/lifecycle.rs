use prayertime_display::core::flags::{
    has_insets_controller, InsetsTypes, SystemBarsBehavior, SystemUiFlags, WindowFlags,
    INSETS_CONTROLLER_API_LEVEL,
};
use prayertime_display::display::host::{HostResult, InsetsController, WindowHost};
use prayertime_display::{ImmersiveDisplayController, LifecycleObserver};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    AddFlags(i32),
    SetDecorFitsSystemWindows(bool),
    Hide(InsetsTypes),
    SetSystemBarsBehavior(SystemBarsBehavior),
    SetSystemUiVisibility(SystemUiFlags),
}

type Log = Rc<RefCell<Vec<Call>>>;

struct RecordingController {
    calls: Log,
}

impl InsetsController for RecordingController {
    fn hide(&mut self, types: InsetsTypes) -> HostResult<()> {
        self.calls.borrow_mut().push(Call::Hide(types));
        Ok(())
    }

    fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior) -> HostResult<()> {
        self.calls
            .borrow_mut()
            .push(Call::SetSystemBarsBehavior(behavior));
        Ok(())
    }
}

/// A window on an OS with the given API level, recording every command it receives.
struct RecordingHost {
    api_level: i32,
    attached: bool,
    calls: Log,
}

impl RecordingHost {
    fn new(api_level: i32) -> Self {
        Self {
            api_level,
            attached: true,
            calls: Rc::default(),
        }
    }

    fn detached(api_level: i32) -> Self {
        Self {
            attached: false,
            ..Self::new(api_level)
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl WindowHost for RecordingHost {
    type Controller = RecordingController;

    fn add_keep_screen_on(&mut self) -> HostResult<()> {
        self.calls
            .borrow_mut()
            .push(Call::AddFlags(WindowFlags::KEEP_SCREEN_ON.bits()));
        Ok(())
    }

    fn supports_insets_controller(&mut self) -> HostResult<bool> {
        Ok(has_insets_controller(self.api_level))
    }

    fn set_decor_fits_system_windows(&mut self, fits: bool) -> HostResult<()> {
        self.calls
            .borrow_mut()
            .push(Call::SetDecorFitsSystemWindows(fits));
        Ok(())
    }

    fn insets_controller(&mut self) -> HostResult<Option<Self::Controller>> {
        Ok(self.attached.then(|| RecordingController {
            calls: self.calls.clone(),
        }))
    }

    fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> HostResult<()> {
        self.calls
            .borrow_mut()
            .push(Call::SetSystemUiVisibility(flags));
        Ok(())
    }
}

fn modern_immersive_calls() -> Vec<Call> {
    vec![
        Call::SetDecorFitsSystemWindows(false),
        Call::Hide(InsetsTypes::STATUS_BARS | InsetsTypes::NAVIGATION_BARS),
        Call::SetSystemBarsBehavior(SystemBarsBehavior::ShowTransientBarsBySwipe),
    ]
}

#[test]
fn created_on_modern_os_hides_bars_through_the_controller() {
    let mut host = RecordingHost::new(34);
    ImmersiveDisplayController::new().on_created(&mut host);

    let mut expected = vec![Call::AddFlags(0x80)];
    expected.extend(modern_immersive_calls());
    assert_eq!(host.calls(), expected);
}

#[test]
fn created_on_legacy_os_sets_the_combined_flag_word() {
    let mut host = RecordingHost::new(29);
    ImmersiveDisplayController::new().on_created(&mut host);

    assert_eq!(
        host.calls(),
        vec![
            Call::AddFlags(0x80),
            Call::SetSystemUiVisibility(SystemUiFlags::immersive_sticky_fullscreen()),
        ]
    );
    assert_eq!(SystemUiFlags::immersive_sticky_fullscreen().bits(), 0x1706);
}

#[test]
fn refocus_on_modern_os_without_controller_returns_normally() {
    let mut host = RecordingHost::detached(INSETS_CONTROLLER_API_LEVEL);
    ImmersiveDisplayController::new().on_focus_changed(&mut host, true);

    assert_eq!(host.calls(), vec![Call::SetDecorFitsSystemWindows(false)]);
}

#[test]
fn branch_follows_the_api_level_threshold() {
    let controller = ImmersiveDisplayController::new();
    for api_level in [19, 21, 26, 28, INSETS_CONTROLLER_API_LEVEL - 1] {
        let mut host = RecordingHost::new(api_level);
        controller.apply_immersive_mode(&mut host);
        assert_eq!(
            host.calls(),
            vec![Call::SetSystemUiVisibility(
                SystemUiFlags::immersive_sticky_fullscreen()
            )],
            "API level {}",
            api_level
        );
    }
    for api_level in [INSETS_CONTROLLER_API_LEVEL, 31, 33, 35] {
        let mut host = RecordingHost::new(api_level);
        controller.apply_immersive_mode(&mut host);
        assert_eq!(host.calls(), modern_immersive_calls(), "API level {}", api_level);
    }
}

#[test]
fn focus_loss_leaves_the_window_alone() {
    let mut host = RecordingHost::new(33);
    ImmersiveDisplayController::new().on_focus_changed(&mut host, false);
    assert!(host.calls().is_empty());
}

#[test]
fn repeated_events_converge_to_the_same_commands() {
    let controller = ImmersiveDisplayController::new();
    let mut host = RecordingHost::new(31);

    controller.on_focus_changed(&mut host, true);
    let first = host.calls();
    host.clear();

    controller.on_focus_changed(&mut host, false);
    controller.on_focus_changed(&mut host, true);
    controller.apply_immersive_mode(&mut host);
    assert_eq!(host.calls(), [first.clone(), first].concat());
}

#[test]
fn every_creation_keeps_the_screen_on_once() {
    let controller = ImmersiveDisplayController::new();
    let mut host = RecordingHost::new(28);

    controller.on_created(&mut host);
    controller.on_created(&mut host);

    let keep_screen_on = host
        .calls()
        .into_iter()
        .filter(|call| *call == Call::AddFlags(WindowFlags::KEEP_SCREEN_ON.bits()))
        .count();
    assert_eq!(keep_screen_on, 2);
}
