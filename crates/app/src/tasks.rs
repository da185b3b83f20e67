//! The three periodic task loops and the display-bus lock.

use embassy_futures::join::join3;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{with_timeout, Duration, Instant, Timer};

use matrix::engine::{period_ms, AnimationEngine};
use platform::audio::{AudioOutput, AudioSource};
use platform::catalog::TrackCatalog;
use platform::config::{CONTROL_PERIOD_MS, DISPLAY_PERIOD_MS, LOCK_TIMEOUT_MS};
use platform::controls::Controls;
use platform::display::{write_line, CharDisplay};
use platform::matrix::{set_intensity_all, LedDriver};
use playback::coordinator::PlaybackCoordinator;
use playback::state::SharedPlayerState;
use ui::frame::{FrameComposer, PlayerView};

use crate::input::InputController;

/// The display-bus lock. Writers hold it for one two-line frame; acquisition
/// is always bounded by [`LOCK_TIMEOUT_MS`].
///
/// `CriticalSectionRawMutex` because the render contexts may live on
/// different cores.
pub type DisplayMutex<D> = Mutex<CriticalSectionRawMutex, D>;

/// Time-sensitive loop: sample inputs, pump the decoder, every cycle, no
/// blocking waits.
pub async fn control_loop<C, O, S>(
    mut controls: C,
    mut output: O,
    mut coordinator: PlaybackCoordinator<S>,
    state: &SharedPlayerState,
) -> !
where
    C: Controls,
    O: AudioOutput,
    S: AudioSource,
{
    let mut input = InputController::new();
    loop {
        let now_ms = Instant::now().as_millis();
        input.poll(now_ms, &mut controls, &mut output, state, &mut coordinator);
        coordinator.tick(state);
        Timer::after_millis(CONTROL_PERIOD_MS).await;
    }
}

/// Periodic display renderer (~4 Hz): compose a frame from a state snapshot,
/// write it under the lock.
pub async fn display_loop<D: CharDisplay>(
    display: &DisplayMutex<D>,
    state: &SharedPlayerState,
    catalog: TrackCatalog,
) -> ! {
    let mut composer = FrameComposer::new();
    loop {
        let _written = render_frame(display, state, catalog, &mut composer).await;
        Timer::after_millis(DISPLAY_PERIOD_MS).await;
    }
}

/// Compose and write one frame.
///
/// Returns `false` when the display lock could not be acquired within the
/// bounded wait — the frame is dropped, never retried synchronously.
pub async fn render_frame<D: CharDisplay>(
    display: &DisplayMutex<D>,
    state: &SharedPlayerState,
    catalog: TrackCatalog,
    composer: &mut FrameComposer,
) -> bool {
    let snapshot = state.snapshot();
    let view = PlayerView {
        active: snapshot.playing || snapshot.paused,
        paused: snapshot.paused,
        path: catalog.get(snapshot.track),
        position: snapshot.position,
        size: snapshot.size,
        title_generation: snapshot.title_epoch,
    };
    let frame = composer.compose(&view, Instant::now().as_millis());

    match with_timeout(Duration::from_millis(LOCK_TIMEOUT_MS), display.lock()).await {
        Ok(mut bus) => {
            write_line(&mut *bus, 0, &frame.line0);
            write_line(&mut *bus, 1, &frame.line1);
            true
        }
        Err(_) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("display lock timeout, frame dropped");
            false
        }
    }
}

/// Periodic LED animation loop. The sleep between frames follows the
/// *selected* mode, so a mode change takes effect at the new cadence on the
/// next tick.
pub async fn matrix_loop<L: LedDriver>(mut driver: L, state: &SharedPlayerState, seed: u32) -> ! {
    let mut engine = AnimationEngine::new(seed);
    let mut applied_intensity = None;
    loop {
        let selected = state.mode();

        let level = state.brightness();
        if Some(level) != applied_intensity {
            applied_intensity = Some(level);
            set_intensity_all(&mut driver, level);
        }

        engine.tick(selected, &mut driver);
        Timer::after_millis(period_ms(selected)).await;
    }
}

/// Run all three loops concurrently as one future.
///
/// For boards that dedicate an executor task to the whole player; boards
/// that pin loops to different cores spawn the individual loops instead.
pub async fn run_all<C, O, S, D, L>(
    controls: C,
    output: O,
    coordinator: PlaybackCoordinator<S>,
    state: &SharedPlayerState,
    display: &DisplayMutex<D>,
    driver: L,
    seed: u32,
) -> !
where
    C: Controls,
    O: AudioOutput,
    S: AudioSource,
    D: CharDisplay,
    L: LedDriver,
{
    let catalog = coordinator.catalog();
    join3(
        control_loop(controls, output, coordinator, state),
        display_loop(display, state, catalog),
        matrix_loop(driver, state, seed),
    )
    .await
    .0
}
