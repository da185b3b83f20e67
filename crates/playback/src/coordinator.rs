//! Decode-session lifecycle.
//!
//! `PlaybackCoordinator` owns the one live [`AudioSession`] and is the only
//! component that starts or stops it. It keeps the shared `playing`/`paused`
//! flags consistent with the session's actual running state, including the
//! self-healing path: the flags and the session lifecycle are updated from
//! different call sites and must never permanently diverge.

use platform::audio::{AudioSession, AudioSource};
use platform::catalog::TrackCatalog;

use crate::state::SharedPlayerState;

/// Owns the decode/stream lifecycle: start, stop, advance-on-finish.
pub struct PlaybackCoordinator<S: AudioSource> {
    source: S,
    catalog: TrackCatalog,
    session: Option<S::Session>,
}

impl<S: AudioSource> PlaybackCoordinator<S> {
    /// Coordinator with no active session.
    pub fn new(source: S, catalog: TrackCatalog) -> Self {
        Self {
            source,
            catalog,
            session: None,
        }
    }

    /// The catalog this coordinator plays from.
    pub fn catalog(&self) -> TrackCatalog {
        self.catalog
    }

    /// The active session, when one exists.
    pub fn session(&self) -> Option<&S::Session> {
        self.session.as_ref()
    }

    /// Mutable access to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Stop any in-flight session and begin a new one for catalog entry
    /// `index`.
    ///
    /// Synchronous and idempotent: safe to call with no active session. On
    /// open failure the player is left idle; the error is absorbed here and
    /// never escalated.
    pub fn start(&mut self, state: &SharedPlayerState, index: usize) {
        // Drop to idle before teardown so a renderer sampling mid-start sees
        // a clean idle state instead of a stale playing one.
        state.mark_idle();
        if let Some(mut old) = self.session.take() {
            old.stop();
        }

        let Some(path) = self.catalog.get(index) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("start: no catalog entry at index {}", index);
            return;
        };

        #[cfg(feature = "defmt")]
        defmt::info!("starting track {}: {}", index, path);

        match self.source.open(path) {
            Ok(session) => {
                state.set_track(index);
                state.set_progress(session.position(), session.size());
                self.session = Some(session);
                state.mark_started();
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("failed to open {}: {}", path, _e);
                // mark_idle above already reset flags, progress and marquee.
            }
        }
    }

    /// Drive the active session for one control cycle.
    ///
    /// Pumps one frame while playing and not paused; on completion or decode
    /// failure the session is stopped and the player returns to idle. If the
    /// playing flag is set but no live session exists, the inconsistency is
    /// corrected here.
    pub fn tick(&mut self, state: &SharedPlayerState) {
        if !state.is_playing() || state.is_paused() {
            return;
        }

        match self.session.as_mut() {
            Some(session) if session.is_open() => {
                if session.pump() {
                    state.set_progress(session.position(), session.size());
                } else {
                    #[cfg(feature = "defmt")]
                    defmt::info!("track {} finished", state.track());
                    session.stop();
                    self.session = None;
                    state.mark_idle();
                }
            }
            _ => {
                #[cfg(feature = "defmt")]
                defmt::warn!("playing flag set with no live session, resetting");
                self.session = None;
                state.mark_idle();
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)] // Test arithmetic on small fixed values
mod tests {
    use platform::catalog::TrackCatalog;
    use platform::mocks::{MockSource, MOCK_CHUNK};

    use super::PlaybackCoordinator;
    use crate::state::SharedPlayerState;

    const PATHS: &[&str] = &["/First_Track.wav", "/Second.wav"];

    fn coordinator(frames: u32) -> PlaybackCoordinator<MockSource> {
        PlaybackCoordinator::new(MockSource::new(frames), TrackCatalog::new(PATHS))
    }

    #[test]
    fn start_opens_entry_and_sets_playing() {
        let state = SharedPlayerState::new();
        let mut c = coordinator(4);
        c.start(&state, 1);
        assert!(state.is_playing());
        assert!(!state.is_paused());
        assert_eq!(state.track(), 1);
        assert!(c.session().is_some());
    }

    #[test]
    fn start_failure_leaves_idle() {
        let state = SharedPlayerState::new();
        let mut c = coordinator(4);
        c.source_mut().fail_next_open = true;
        c.start(&state, 0);
        assert!(!state.is_playing());
        assert!(!state.is_paused());
        assert!(c.session().is_none());
        let snap = state.snapshot();
        assert_eq!((snap.position, snap.size), (0, 0));
    }

    #[test]
    fn start_bumps_title_epoch() {
        let state = SharedPlayerState::new();
        let mut c = coordinator(4);
        let before = state.title_epoch();
        c.start(&state, 0);
        assert!(state.title_epoch() > before);
    }

    #[test]
    fn start_replaces_inflight_session() {
        let state = SharedPlayerState::new();
        let mut c = coordinator(1000);
        c.start(&state, 0);
        c.start(&state, 1);
        assert_eq!(c.source_mut().opened.len(), 2);
        assert_eq!(state.track(), 1);
        assert!(state.is_playing());
    }

    #[test]
    fn tick_publishes_progress() {
        let state = SharedPlayerState::new();
        let mut c = coordinator(4);
        c.start(&state, 0);
        c.tick(&state);
        let snap = state.snapshot();
        assert_eq!(snap.position, MOCK_CHUNK);
        assert_eq!(snap.size, 4 * MOCK_CHUNK);
    }

    #[test]
    fn session_completion_returns_to_idle() {
        let state = SharedPlayerState::new();
        let mut c = coordinator(2);
        c.start(&state, 0);
        for _ in 0..3 {
            c.tick(&state);
        }
        assert!(!state.is_playing());
        assert!(c.session().is_none());
        let snap = state.snapshot();
        assert_eq!((snap.position, snap.size), (0, 0));
    }

    #[test]
    fn tick_skips_while_paused() {
        let state = SharedPlayerState::new();
        let mut c = coordinator(4);
        c.start(&state, 0);
        c.tick(&state);
        let before = state.snapshot().position;
        let _ = state.toggle_paused();
        c.tick(&state);
        assert_eq!(state.snapshot().position, before);
        assert!(state.is_playing());
    }

    #[test]
    fn self_heals_playing_without_session() {
        let state = SharedPlayerState::new();
        let mut c = coordinator(4);
        state.mark_started(); // flag raised from another call site, no session
        c.tick(&state);
        assert!(!state.is_playing());
        assert!(!state.is_paused());
    }
}
