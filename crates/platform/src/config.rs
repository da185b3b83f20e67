//! Timing and geometry constants shared by every task.
//!
//! All intervals are plain milliseconds so that `no_std` feature crates can
//! consume them without pulling in a time driver; the `app` crate converts
//! them to `embassy_time::Duration` at the sleep sites.

/// Minimum interval between two accepted presses of the same button.
pub const DEBOUNCE_MS: u64 = 200;

/// Period of the time-sensitive control loop (input + playback pump).
pub const CONTROL_PERIOD_MS: u64 = 10;

/// Period of the character-display render loop (~4 Hz).
pub const DISPLAY_PERIOD_MS: u64 = 250;

/// Interval between marquee advances while a long title scrolls.
pub const SCROLL_STEP_MS: u64 = 350;

/// Dwell at the end of a scroll cycle before the marquee restarts.
pub const SCROLL_DWELL_MS: u64 = 2000;

/// Bounded wait for the display bus lock; on expiry the frame is dropped.
pub const LOCK_TIMEOUT_MS: u64 = 50;

/// LED animation period for most modes.
pub const MATRIX_PERIOD_MS: u64 = 50;

/// LED animation period in Music mode (random bars look better slower).
pub const MATRIX_MUSIC_PERIOD_MS: u64 = 100;

/// LED animation period in Off mode (nothing to draw, just keep clearing).
pub const MATRIX_OFF_PERIOD_MS: u64 = 500;

/// Character display width in columns.
pub const LCD_COLS: usize = 16;

/// Character display height in rows.
pub const LCD_ROWS: usize = 2;

/// Full-scale ADC reading for both pots (12-bit).
pub const ADC_MAX: u16 = 4095;

/// Maximum LED panel intensity accepted by the driver chip.
pub const MAX_INTENSITY: u8 = 15;

/// Rows per 8×8 LED panel.
pub const ROWS_PER_PANEL: usize = 8;

/// Columns per 8×8 LED panel.
pub const COLS_PER_PANEL: usize = 8;

/// Upper bound on chained panels; animation buffers are sized for this.
pub const MAX_PANELS: usize = 8;
