//! Input controller — debounced buttons and the two analog pots.
//!
//! Runs inside the control loop every cycle. Each button has its own
//! debounce timer, so two different buttons can both be serviced inside one
//! debounce window while a bouncing contact on either still registers once.
//! The timers never reset except by elapsed time.

use platform::audio::{AudioOutput, AudioSource};
use platform::config::DEBOUNCE_MS;
use platform::controls::{Button, Controls};
use playback::coordinator::PlaybackCoordinator;
use playback::levels::{brightness_level, volume_gain};
use playback::state::SharedPlayerState;

/// Debounce timers plus the brightness change detector.
pub struct InputController {
    last_accepted_ms: [u64; 4],
    last_brightness: Option<u8>,
}

impl InputController {
    /// Controller with all debounce windows starting at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_accepted_ms: [0; 4],
            last_brightness: None,
        }
    }

    /// Sample every control once and perform the resulting actions.
    ///
    /// - volume pot → output gain, applied every cycle
    /// - brightness pot → shared intensity, published only on change
    /// - buttons → track change / play-pause / animation cycle, one action
    ///   per accepted press
    pub fn poll<C, O, S>(
        &mut self,
        now_ms: u64,
        controls: &mut C,
        output: &mut O,
        state: &SharedPlayerState,
        coordinator: &mut PlaybackCoordinator<S>,
    ) where
        C: Controls,
        O: AudioOutput,
        S: AudioSource,
    {
        output.set_gain(volume_gain(controls.volume_raw()));

        let level = brightness_level(controls.brightness_raw());
        if Some(level) != self.last_brightness {
            self.last_brightness = Some(level);
            #[cfg(feature = "defmt")]
            defmt::info!("panel intensity -> {}", level);
            state.set_brightness(level);
        }

        let catalog = coordinator.catalog();
        if !catalog.is_empty() {
            if controls.is_pressed(Button::Previous) && self.accept(Button::Previous, now_ms) {
                let index = catalog.prev_index(state.track());
                state.set_track(index);
                coordinator.start(state, index);
            }
            if controls.is_pressed(Button::Next) && self.accept(Button::Next, now_ms) {
                let index = catalog.next_index(state.track());
                state.set_track(index);
                coordinator.start(state, index);
            }
            if controls.is_pressed(Button::Play) && self.accept(Button::Play, now_ms) {
                if state.is_playing() {
                    let _paused = state.toggle_paused();
                    #[cfg(feature = "defmt")]
                    defmt::info!(
                        "{}",
                        if _paused == Some(true) { "paused" } else { "resumed" }
                    );
                } else {
                    coordinator.start(state, state.track());
                }
            }
        }
        if controls.is_pressed(Button::Animation) && self.accept(Button::Animation, now_ms) {
            let mode = state.mode().next();
            state.set_mode(mode);
            #[cfg(feature = "defmt")]
            defmt::info!("animation mode -> {}", mode);
        }
    }

    /// Accept a press on `button` when its debounce interval has elapsed.
    fn accept(&mut self, button: Button, now_ms: u64) -> bool {
        let Some(slot) = self.last_accepted_ms.get_mut(button.index()) else {
            return false;
        };
        if now_ms.saturating_sub(*slot) >= DEBOUNCE_MS {
            *slot = now_ms;
            true
        } else {
            false
        }
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)] // Test arithmetic on small fixed timestamps
mod tests {
    use platform::catalog::TrackCatalog;
    use platform::controls::Button;
    use platform::matrix::AnimationMode;
    use platform::mocks::{MockControls, MockOutput, MockSource};
    use playback::coordinator::PlaybackCoordinator;
    use playback::state::SharedPlayerState;

    use super::InputController;

    const PATHS: &[&str] = &["/a.wav", "/b.wav", "/c.wav"];

    struct Rig {
        input: InputController,
        controls: MockControls,
        output: MockOutput,
        state: SharedPlayerState,
        coordinator: PlaybackCoordinator<MockSource>,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                input: InputController::new(),
                controls: MockControls::new(),
                output: MockOutput::default(),
                state: SharedPlayerState::new(),
                coordinator: PlaybackCoordinator::new(
                    MockSource::new(100),
                    TrackCatalog::new(PATHS),
                ),
            }
        }

        fn poll(&mut self, now_ms: u64) {
            self.input.poll(
                now_ms,
                &mut self.controls,
                &mut self.output,
                &self.state,
                &mut self.coordinator,
            );
        }

        fn tap(&mut self, button: Button, now_ms: u64) {
            self.controls.press(button);
            self.poll(now_ms);
            self.controls.release(button);
        }
    }

    #[test]
    fn next_advances_and_starts_playback() {
        let mut rig = Rig::new();
        rig.tap(Button::Next, 1000);
        assert_eq!(rig.state.track(), 1);
        assert!(rig.state.is_playing());
        assert_eq!(rig.coordinator.source_mut().opened.len(), 1);
    }

    #[test]
    fn previous_wraps_to_last_track() {
        let mut rig = Rig::new();
        rig.tap(Button::Previous, 1000);
        assert_eq!(rig.state.track(), 2);
        assert!(rig.state.is_playing());
    }

    #[test]
    fn repeated_next_cycles_back_to_start() {
        let mut rig = Rig::new();
        for i in 0..PATHS.len() as u64 {
            rig.tap(Button::Next, 1000 + i * 300);
        }
        assert_eq!(rig.state.track(), 0);
    }

    #[test]
    fn two_presses_within_debounce_window_act_once() {
        let mut rig = Rig::new();
        rig.tap(Button::Next, 1000);
        rig.tap(Button::Next, 1100); // 100 ms later: bounce, ignored
        assert_eq!(rig.state.track(), 1);
        rig.tap(Button::Next, 1200); // 200 ms after acceptance: accepted
        assert_eq!(rig.state.track(), 2);
    }

    #[test]
    fn debounce_groups_are_independent_per_button() {
        let mut rig = Rig::new();
        rig.tap(Button::Next, 1000);
        // A different button inside Next's window is still serviced.
        rig.tap(Button::Animation, 1050);
        assert_eq!(rig.state.track(), 1);
        assert_eq!(rig.state.mode(), AnimationMode::HorizontalSweep);
    }

    #[test]
    fn play_starts_then_toggles_pause() {
        let mut rig = Rig::new();
        rig.tap(Button::Play, 1000);
        assert!(rig.state.is_playing());
        assert!(!rig.state.is_paused());
        rig.tap(Button::Play, 1300);
        assert!(rig.state.is_paused());
        rig.tap(Button::Play, 1600);
        assert!(!rig.state.is_paused());
        assert!(rig.state.is_playing());
    }

    #[test]
    fn animation_button_cycles_all_modes() {
        let mut rig = Rig::new();
        let mut expected = AnimationMode::VerticalSweep;
        for i in 0..5_u64 {
            rig.tap(Button::Animation, 1000 + i * 250);
            expected = expected.next();
            assert_eq!(rig.state.mode(), expected);
        }
        assert_eq!(rig.state.mode(), AnimationMode::VerticalSweep);
    }

    #[test]
    fn volume_is_applied_every_cycle() {
        let mut rig = Rig::new();
        rig.controls.volume = 4095;
        rig.poll(1000);
        rig.poll(1010);
        assert_eq!(rig.output.gains.len(), 2);
        assert_eq!(rig.output.gains.last(), Some(&1.0));
    }

    #[test]
    fn brightness_publishes_only_on_change() {
        let mut rig = Rig::new();
        rig.controls.brightness = 4095;
        rig.poll(1000);
        assert_eq!(rig.state.brightness(), 15);
        rig.state.set_brightness(0); // matrix task applied it; no new publish
        rig.poll(1010);
        assert_eq!(rig.state.brightness(), 0, "same level must not republish");
        rig.controls.brightness = 0;
        rig.poll(1020);
        assert_eq!(rig.state.brightness(), 0);
    }
}
