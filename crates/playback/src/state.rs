//! Shared player state.
//!
//! The single source of truth read by every task. Each field is an
//! individual atomic accessed with `Ordering::Relaxed`: readers always see a
//! valid value per field, but a snapshot taken mid-update may combine fields
//! from different moments (track index updated, progress not yet). That torn
//! combination renders as a momentarily stale frame and fixes itself on the
//! next cycle, so no cross-field lock is taken — the display *bus* is the
//! only locked resource in the system, not this state.
//!
//! Writer discipline for the `paused ⇒ playing` invariant: `paused` is
//! cleared *before* `playing` on the way down and `playing` is raised before
//! any pause toggling is possible on the way up, so no interleaving exposes
//! `paused && !playing`.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, AtomicUsize, Ordering};

use platform::config::MAX_INTENSITY;
use platform::matrix::AnimationMode;

/// Atomic-field player state shared by all tasks.
pub struct SharedPlayerState {
    track: AtomicUsize,
    playing: AtomicBool,
    paused: AtomicBool,
    mode: AtomicU8,
    /// Bumped whenever the displayed title changes (track change or playback
    /// start/stop). The display renderer resets its marquee when it observes
    /// a new value; the scroll cursor itself is owned by the renderer.
    title_epoch: AtomicU32,
    progress_pos: AtomicU32,
    progress_len: AtomicU32,
    /// Panel intensity computed from the brightness pot. Written by the
    /// input controller, applied to the bus by the matrix task — the LED
    /// driver keeps a single owner.
    brightness: AtomicU8,
}

/// Point-in-time copy of the fields the display renderer needs.
///
/// Loaded field-by-field; see the module docs for the consistency contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Current catalog index.
    pub track: usize,
    /// Whether a session is (logically) live.
    pub playing: bool,
    /// Whether playback is suspended. Implies `playing`.
    pub paused: bool,
    /// Title generation counter.
    pub title_epoch: u32,
    /// Bytes consumed by the active session, 0 when idle.
    pub position: u32,
    /// Total bytes of the active session, 0 when idle/unknown.
    pub size: u32,
}

impl SharedPlayerState {
    /// Idle state: track 0, not playing, default animation mode.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            track: AtomicUsize::new(0),
            playing: AtomicBool::new(false),
            paused: AtomicBool::new(false),
            mode: AtomicU8::new(0),
            title_epoch: AtomicU32::new(0),
            progress_pos: AtomicU32::new(0),
            progress_len: AtomicU32::new(0),
            brightness: AtomicU8::new(MAX_INTENSITY),
        }
    }

    /// Current catalog index.
    pub fn track(&self) -> usize {
        self.track.load(Ordering::Relaxed)
    }

    /// Store a new catalog index.
    pub fn set_track(&self, index: usize) {
        self.track.store(index, Ordering::Relaxed);
    }

    /// Whether a session is logically live.
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }

    /// Whether playback is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    /// Mark playback started: playing, not paused, new title generation.
    pub fn mark_started(&self) {
        self.playing.store(true, Ordering::Relaxed);
        self.paused.store(false, Ordering::Relaxed);
        self.bump_title_epoch();
    }

    /// Return to idle: paused cleared first so `paused ⇒ playing` holds for
    /// every interleaved reader, then playing, then a new title generation.
    pub fn mark_idle(&self) {
        self.paused.store(false, Ordering::Relaxed);
        self.playing.store(false, Ordering::Relaxed);
        self.set_progress(0, 0);
        self.bump_title_epoch();
    }

    /// Toggle pause. No-op while not playing, so the invariant cannot be
    /// violated by a stray button press in the idle state.
    ///
    /// Returns the new paused value, or `None` when idle.
    pub fn toggle_paused(&self) -> Option<bool> {
        if !self.is_playing() {
            return None;
        }
        let now_paused = !self.paused.load(Ordering::Relaxed);
        self.paused.store(now_paused, Ordering::Relaxed);
        Some(now_paused)
    }

    /// Selected animation mode.
    pub fn mode(&self) -> AnimationMode {
        AnimationMode::from_tag(self.mode.load(Ordering::Relaxed))
    }

    /// Store a new animation mode.
    pub fn set_mode(&self, mode: AnimationMode) {
        self.mode.store(mode.to_tag(), Ordering::Relaxed);
    }

    /// Title generation counter.
    pub fn title_epoch(&self) -> u32 {
        self.title_epoch.load(Ordering::Relaxed)
    }

    /// Publish session progress for the renderer.
    pub fn set_progress(&self, position: u32, size: u32) {
        self.progress_pos.store(position, Ordering::Relaxed);
        self.progress_len.store(size, Ordering::Relaxed);
    }

    /// Panel intensity requested by the brightness pot, `0..=15`.
    pub fn brightness(&self) -> u8 {
        self.brightness.load(Ordering::Relaxed)
    }

    /// Publish a new panel intensity for the matrix task to apply.
    pub fn set_brightness(&self, level: u8) {
        self.brightness.store(level.min(MAX_INTENSITY), Ordering::Relaxed);
    }

    fn bump_title_epoch(&self) {
        self.title_epoch.fetch_add(1, Ordering::Relaxed);
    }

    /// Field-by-field snapshot for one render.
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            track: self.track.load(Ordering::Relaxed),
            playing: self.playing.load(Ordering::Relaxed),
            paused: self.paused.load(Ordering::Relaxed),
            title_epoch: self.title_epoch.load(Ordering::Relaxed),
            position: self.progress_pos.load(Ordering::Relaxed),
            size: self.progress_len.load(Ordering::Relaxed),
        }
    }
}

impl Default for SharedPlayerState {
    fn default() -> Self {
        Self::new()
    }
}
