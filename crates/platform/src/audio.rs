//! Audio decode/stream abstraction.
//!
//! The playback coordinator owns one [`AudioSession`] at a time and is the
//! only caller of the lifecycle methods. Renderers never touch the session
//! directly; the coordinator republishes progress through the shared state.

use thiserror_no_std::Error;

/// Failure to begin a decode/stream session for a catalog entry.
///
/// Per the error policy both variants are absorbed locally: the start attempt
/// is aborted, the player returns to idle, and a diagnostic is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OpenError {
    /// The catalog entry could not be opened on the storage medium.
    #[error("catalog entry could not be opened")]
    NotFound,
    /// The file opened but the decoder rejected it.
    #[error("decoder failed to initialise")]
    Decoder,
}

/// Factory for decode/stream sessions.
pub trait AudioSource {
    /// Live session type produced by [`open`](AudioSource::open).
    type Session: AudioSession;

    /// Open the catalog entry at `path` and start a decode session.
    ///
    /// # Errors
    ///
    /// Returns [`OpenError`] when the entry cannot be opened or the decoder
    /// cannot initialise. The source must be left ready for a later `open`.
    fn open(&mut self, path: &str) -> Result<Self::Session, OpenError>;
}

/// A live decode/stream session for one open catalog entry.
pub trait AudioSession {
    /// Drive the decoder for one frame.
    ///
    /// Returns `true` while the session can still produce output; `false`
    /// signals completion or a decode error (treated identically — the
    /// caller stops the session either way).
    fn pump(&mut self) -> bool;

    /// Stop and release the underlying stream. Idempotent.
    fn stop(&mut self);

    /// Bytes consumed so far.
    fn position(&self) -> u32;

    /// Total byte size of the entry, 0 when unknown.
    fn size(&self) -> u32;

    /// Whether the underlying file handle is still open.
    fn is_open(&self) -> bool;
}

/// Output-side gain control (the I²S/amplifier end of the chain).
pub trait AudioOutput {
    /// Set the output gain as a fraction in `[0.0, 1.0]`.
    fn set_gain(&mut self, gain: f32);
}
