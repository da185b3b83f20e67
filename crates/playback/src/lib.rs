//! Playback core — shared player state, the decode-session coordinator, and
//! the analog level maps.
//!
//! This crate has no I/O of its own: the coordinator drives an
//! [`platform::AudioSource`] handed in by the task layer, and everything else
//! is pure state. That keeps the whole crate testable on the host.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod coordinator;
pub mod levels;
pub mod state;

pub use coordinator::PlaybackCoordinator;
pub use state::{PlayerSnapshot, SharedPlayerState};
