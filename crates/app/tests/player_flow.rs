//! End-to-end player scenario against the mock collaborators: idle → play →
//! progress → completion → back to idle, with real frames rendered through
//! the display lock.

#![allow(clippy::arithmetic_side_effects)]

use app::input::InputController;
use app::tasks::{render_frame, DisplayMutex};
use platform::catalog::TrackCatalog;
use platform::controls::Button;
use platform::mocks::{MockCharDisplay, MockControls, MockOutput, MockSource};
use playback::coordinator::PlaybackCoordinator;
use playback::state::SharedPlayerState;
use ui::frame::FrameComposer;

const PATHS: &[&str] = &["/First_Song.wav", "/Second_Song.wav"];

struct Player {
    state: SharedPlayerState,
    display: DisplayMutex<MockCharDisplay>,
    catalog: TrackCatalog,
    coordinator: PlaybackCoordinator<MockSource>,
    composer: FrameComposer,
    input: InputController,
    controls: MockControls,
    output: MockOutput,
    now_ms: u64,
}

impl Player {
    fn new(frames: u32) -> Self {
        let catalog = TrackCatalog::new(PATHS);
        Self {
            state: SharedPlayerState::new(),
            display: DisplayMutex::new(MockCharDisplay::new()),
            catalog,
            coordinator: PlaybackCoordinator::new(MockSource::new(frames), catalog),
            composer: FrameComposer::new(),
            input: InputController::new(),
            controls: MockControls::new(),
            output: MockOutput::default(),
            now_ms: 1000,
        }
    }

    fn tap(&mut self, button: Button) {
        self.now_ms += 300; // past the debounce window
        self.controls.press(button);
        self.input.poll(
            self.now_ms,
            &mut self.controls,
            &mut self.output,
            &self.state,
            &mut self.coordinator,
        );
        self.controls.release(button);
    }

    async fn render(&mut self) -> (String, String) {
        assert!(render_frame(&self.display, &self.state, self.catalog, &mut self.composer).await);
        let bus = self.display.lock().await;
        (bus.row_text(0).to_string(), bus.row_text(1).to_string())
    }
}

#[tokio::test]
async fn idle_player_renders_ready() {
    let mut p = Player::new(4);
    let (line0, line1) = p.render().await;
    assert!(line0.starts_with("Ready..."), "line0: {line0:?}");
    assert_eq!(line1, "_".repeat(16));
}

#[tokio::test]
async fn play_renders_title_and_progress() {
    let mut p = Player::new(4);
    p.tap(Button::Play);
    assert!(p.state.is_playing());
    p.coordinator.tick(&p.state); // one pumped frame: 512 of 2048 bytes
    let (line0, line1) = p.render().await;
    assert!(line0.starts_with("First Song"), "line0: {line0:?}");
    // floor(512 / 2048 * 16) = 4 filled cells (glyphs print as '?').
    assert_eq!(line1.matches('?').count(), 4);
    assert_eq!(line1.matches('_').count(), 12);
}

#[tokio::test]
async fn pause_renders_centered_banner() {
    let mut p = Player::new(4);
    p.tap(Button::Play);
    p.tap(Button::Play); // toggle into pause
    assert!(p.state.is_paused());
    let (_, line1) = p.render().await;
    assert_eq!(line1, "  ---PAUSED---  ");
}

#[tokio::test]
async fn completed_track_returns_to_ready() {
    let mut p = Player::new(2);
    p.tap(Button::Play);
    for _ in 0..3 {
        p.coordinator.tick(&p.state);
    }
    assert!(!p.state.is_playing());
    let (line0, line1) = p.render().await;
    assert!(line0.starts_with("Ready..."), "line0: {line0:?}");
    assert_eq!(line1, "_".repeat(16));
}

#[tokio::test]
async fn next_during_playback_switches_track() {
    let mut p = Player::new(1000);
    p.tap(Button::Play);
    p.tap(Button::Next);
    assert_eq!(p.state.track(), 1);
    assert!(p.state.is_playing());
    let (line0, _) = p.render().await;
    assert!(line0.starts_with("Second Song"), "line0: {line0:?}");
}

#[tokio::test]
async fn open_failure_falls_back_to_ready() {
    let mut p = Player::new(4);
    p.coordinator.source_mut().fail_next_open = true;
    p.tap(Button::Play);
    assert!(!p.state.is_playing());
    let (line0, _) = p.render().await;
    assert!(line0.starts_with("Ready..."), "line0: {line0:?}");
}
