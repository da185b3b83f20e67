//! Mock implementations for testing.
//!
//! This module provides mock implementations of all platform traits for use
//! in unit and integration tests. They are allocation-free so the same mocks
//! serve host tests and on-target smoke tests.

#![cfg(any(test, feature = "std"))]
#![allow(clippy::unwrap_used)] // capacity overflow in a mock is a test bug
#![allow(clippy::indexing_slicing)] // button/panel indices are bounded by construction

use crate::audio::{AudioOutput, AudioSession, AudioSource, OpenError};
use crate::controls::{Button, Controls};
use crate::display::CharDisplay;
use crate::matrix::LedDriver;
use crate::config::{LCD_COLS, MAX_PANELS};

/// Bytes "consumed" per successful [`MockSession::pump`] call.
pub const MOCK_CHUNK: u32 = 512;

/// Scripted audio source.
///
/// `open` succeeds unless [`fail_next_open`](Self::fail_next_open) is set,
/// producing a session that runs for [`frames`](Self::frames) pump calls.
pub struct MockSource {
    /// When set, the next `open` fails with [`OpenError::NotFound`] and the
    /// flag clears.
    pub fail_next_open: bool,
    /// Pump calls a fresh session will survive.
    pub frames: u32,
    /// Reported total size of every opened entry.
    pub size: u32,
    /// Paths passed to `open`, in order.
    pub opened: heapless::Vec<heapless::String<64>, 8>,
}

impl MockSource {
    /// Source whose sessions run for `frames` pump calls.
    pub fn new(frames: u32) -> Self {
        Self {
            fail_next_open: false,
            frames,
            size: frames.saturating_mul(MOCK_CHUNK),
            opened: heapless::Vec::new(),
        }
    }
}

impl AudioSource for MockSource {
    type Session = MockSession;

    fn open(&mut self, path: &str) -> Result<MockSession, OpenError> {
        let mut owned = heapless::String::new();
        let _ = owned.push_str(path);
        self.opened.push(owned).unwrap();
        if self.fail_next_open {
            self.fail_next_open = false;
            return Err(OpenError::NotFound);
        }
        Ok(MockSession {
            remaining: self.frames,
            consumed: 0,
            size: self.size,
            open: true,
            stopped: false,
        })
    }
}

/// Session produced by [`MockSource`].
pub struct MockSession {
    remaining: u32,
    consumed: u32,
    size: u32,
    open: bool,
    /// Whether `stop` has been called.
    pub stopped: bool,
}

impl AudioSession for MockSession {
    fn pump(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.consumed = self.consumed.saturating_add(MOCK_CHUNK);
        true
    }

    fn stop(&mut self) {
        self.open = false;
        self.stopped = true;
    }

    fn position(&self) -> u32 {
        self.consumed
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// Gain-recording audio output.
#[derive(Default)]
pub struct MockOutput {
    /// Every gain value applied, in order.
    pub gains: heapless::Vec<f32, 64>,
}

impl AudioOutput for MockOutput {
    fn set_gain(&mut self, gain: f32) {
        if self.gains.is_full() {
            self.gains.remove(0);
        }
        self.gains.push(gain).unwrap();
    }
}

/// In-memory 16×2 character display.
pub struct MockCharDisplay {
    /// The visible cell contents, `[row][col]`, glyph codes included.
    pub cells: [[u8; LCD_COLS]; 2],
    cursor_col: usize,
    cursor_row: usize,
    /// Total bytes written (glyphs + chars).
    pub writes: usize,
}

impl MockCharDisplay {
    /// Blank display.
    pub fn new() -> Self {
        Self {
            cells: [[b' '; LCD_COLS]; 2],
            cursor_col: 0,
            cursor_row: 0,
            writes: 0,
        }
    }

    fn put(&mut self, b: u8) {
        if let Some(cell) = self
            .cells
            .get_mut(self.cursor_row)
            .and_then(|row| row.get_mut(self.cursor_col))
        {
            *cell = b;
        }
        self.cursor_col = self.cursor_col.saturating_add(1);
        self.writes = self.writes.saturating_add(1);
    }

    /// Row contents as a `&str` (glyph codes render as `?`).
    pub fn row_text(&self, row: usize) -> heapless::String<16> {
        let mut s = heapless::String::new();
        if let Some(cells) = self.cells.get(row) {
            for &b in cells {
                let c = if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '?'
                };
                let _ = s.push(c);
            }
        }
        s
    }
}

impl Default for MockCharDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl CharDisplay for MockCharDisplay {
    fn set_cursor(&mut self, col: u8, row: u8) {
        self.cursor_col = col as usize;
        self.cursor_row = row as usize;
    }

    fn write_glyph(&mut self, code: u8) {
        self.put(code);
    }

    fn write_char(&mut self, c: u8) {
        self.put(c);
    }
}

/// In-memory LED panel chain. Pixels are stored column-major per panel.
pub struct MockLedDriver {
    panels: usize,
    /// `columns[panel][col]` — bit `n` lights row `n`.
    pub columns: [[u8; 8]; MAX_PANELS],
    /// Last intensity applied per panel (`None` until first write).
    pub intensity: [Option<u8>; MAX_PANELS],
    /// Total `set_intensity` calls across all panels.
    pub intensity_writes: usize,
}

impl MockLedDriver {
    /// Chain of `panels` blank panels.
    pub fn new(panels: usize) -> Self {
        Self {
            panels: panels.min(MAX_PANELS),
            columns: [[0; 8]; MAX_PANELS],
            intensity: [None; MAX_PANELS],
            intensity_writes: 0,
        }
    }

    /// Count of lit pixels across the whole chain.
    pub fn lit_pixels(&self) -> usize {
        self.columns
            .iter()
            .take(self.panels)
            .flatten()
            .map(|c| c.count_ones() as usize)
            .sum()
    }

    /// Count of columns with at least one lit pixel.
    pub fn lit_columns(&self) -> usize {
        self.columns
            .iter()
            .take(self.panels)
            .flatten()
            .filter(|c| **c != 0)
            .count()
    }
}

impl LedDriver for MockLedDriver {
    fn panel_count(&self) -> usize {
        self.panels
    }

    fn clear_panel(&mut self, panel: usize) {
        if let Some(cols) = self.columns.get_mut(panel) {
            *cols = [0; 8];
        }
    }

    fn set_column(&mut self, panel: usize, col: usize, bits: u8) {
        if let Some(cell) = self.columns.get_mut(panel).and_then(|p| p.get_mut(col)) {
            *cell = bits;
        }
    }

    fn set_row(&mut self, panel: usize, row: usize, bits: u8) {
        if row >= 8 {
            return;
        }
        if let Some(cols) = self.columns.get_mut(panel) {
            for (col, cell) in cols.iter_mut().enumerate() {
                if bits & (1 << col) != 0 {
                    *cell |= 1 << row;
                } else {
                    *cell &= !(1 << row);
                }
            }
        }
    }

    fn set_intensity(&mut self, panel: usize, level: u8) {
        if let Some(slot) = self.intensity.get_mut(panel) {
            *slot = Some(level);
        }
        self.intensity_writes = self.intensity_writes.saturating_add(1);
    }
}

/// Scripted front panel.
pub struct MockControls {
    pressed: [bool; 4],
    /// Raw volume pot value returned by `volume_raw`.
    pub volume: u16,
    /// Raw brightness pot value returned by `brightness_raw`.
    pub brightness: u16,
}

impl MockControls {
    /// Nothing pressed, both pots at zero.
    pub fn new() -> Self {
        Self {
            pressed: [false; 4],
            volume: 0,
            brightness: 0,
        }
    }

    /// Hold `button` down.
    pub fn press(&mut self, button: Button) {
        self.pressed[button.index()] = true;
    }

    /// Release `button`.
    pub fn release(&mut self, button: Button) {
        self.pressed[button.index()] = false;
    }
}

impl Default for MockControls {
    fn default() -> Self {
        Self::new()
    }
}

impl Controls for MockControls {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.pressed[button.index()]
    }

    fn volume_raw(&mut self) -> u16 {
        self.volume
    }

    fn brightness_raw(&mut self) -> u16 {
        self.brightness
    }
}
