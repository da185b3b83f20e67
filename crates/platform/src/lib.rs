//! Hardware abstraction layer for the Wavebox player.
//!
//! This crate provides trait-based abstractions for every external
//! collaborator the player core talks to, enabling development and testing
//! without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Task layer (app crate — periodic loops, display lock)
//!         ↓
//! Feature layers (playback, ui, matrix)
//!         ↓
//! Platform HAL (this crate — trait abstractions)
//!         ↓
//! Hardware layer (board crate: I²S codec, I²C LCD, MAX7219 chain, ADC/GPIO)
//! ```
//!
//! # Abstractions
//!
//! - [`AudioSource`] / [`AudioSession`] — decode/stream lifecycle of one track
//! - [`AudioOutput`] — output gain
//! - [`CharDisplay`] — 16×2 character display bus
//! - [`LedDriver`] — chained 8×8 LED panel bus
//! - [`Controls`] — momentary buttons + two analog pots
//! - [`TrackCatalog`] — the fixed, ordered track path list
//!
//! # Features
//!
//! - `std`: enable the mock collaborators in [`mocks`] (host testing)
//! - `defmt`: enable `defmt::Format` derives (hardware builds only)

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod audio;
pub mod catalog;
pub mod config;
pub mod controls;
pub mod display;
pub mod matrix;
pub mod mocks;

pub use audio::{AudioOutput, AudioSession, AudioSource, OpenError};
pub use catalog::TrackCatalog;
pub use controls::{Button, Controls};
pub use display::CharDisplay;
pub use matrix::LedDriver;
