//! Task layer — the three periodic loops and the display-bus lock.
//!
//! # Scheduling model
//!
//! ```text
//! control_loop   every 10 ms   input sampling + playback pump (time-sensitive)
//! display_loop   every 250 ms  frame composition + locked bus write
//! matrix_loop    mode cadence  LED animation + intensity application
//! ```
//!
//! The loops are plain `async fn`s, generic over the `platform` traits, so
//! the board crate spawns them on its executor (pinning the control loop to
//! the core that owns the decoder) and host tests drive the underlying step
//! functions directly. None of the loops ever exits; the only
//! "cancel-and-restart" operation in the system is
//! [`PlaybackCoordinator::start`](playback::PlaybackCoordinator::start).
//!
//! The character-display bus is the one shared exclusive resource: writes
//! happen under [`DisplayMutex`] with a bounded wait, and a timed-out frame
//! is dropped with a diagnostic rather than stalling the renderer.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod input;
pub mod tasks;

pub use input::InputController;
pub use tasks::{control_loop, display_loop, matrix_loop, run_all, DisplayMutex};
