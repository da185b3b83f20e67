//! LED-matrix animation engine for the chained 8×8 panels.
//!
//! One periodic task drives [`AnimationEngine::tick`]; the engine owns all
//! animation state (step counter, lifeline shift register, PRNG) and writes
//! panels through the [`platform::LedDriver`] trait. Nothing else writes
//! pixel data, so the LED bus needs no lock.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod engine;
pub mod rng;

pub use engine::{period_ms, AnimationEngine};
pub use rng::Rng;
