//! Character-display frame composition — title marquee, progress bar, pause
//! banner.
//!
//! Everything here is pure: composition takes a point-in-time view of the
//! player plus a millisecond clock value and produces two fixed-width byte
//! lines. Writing those lines to the bus (under the display lock) is the
//! `app` crate's job. This crate is `no_std`; it only uses `core`,
//! `heapless` and the `platform` constants.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod frame;
pub mod marquee;
pub mod title;

pub use frame::{DisplayFrame, FrameComposer, PlayerView};
pub use marquee::Marquee;
