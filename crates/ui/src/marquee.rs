//! Scrolling-title renderer with end-of-cycle dwell.
//!
//! A title wider than the content area scrolls one column every
//! [`SCROLL_STEP_MS`] of elapsed time (not every render call — the display
//! task runs faster than the scroll cadence). When the offset reaches the
//! title length the view freezes on the final window for
//! [`SCROLL_DWELL_MS`], then the cycle restarts from offset zero.
//!
//! The cursor is owned here, by the renderer; the coordinator signals "the
//! displayed title changed" through a generation counter and the caller
//! invokes [`Marquee::reset`].

use platform::config::{SCROLL_DWELL_MS, SCROLL_STEP_MS};

/// Scroll cursor and dwell timer for one display line.
pub struct Marquee {
    offset: usize,
    dwelling: bool,
    last_step_ms: u64,
    dwell_start_ms: u64,
}

impl Marquee {
    /// Cursor at offset zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0,
            dwelling: false,
            last_step_ms: 0,
            dwell_start_ms: 0,
        }
    }

    /// Restart the cycle, anchoring the step timer at `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.offset = 0;
        self.dwelling = false;
        self.last_step_ms = now_ms;
    }

    /// Current scroll offset (columns).
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the cursor is in the end-of-cycle dwell.
    #[must_use]
    pub fn is_dwelling(&self) -> bool {
        self.dwelling
    }

    /// Render `title` into the content window `line`, advancing the cursor
    /// as dictated by `now_ms`.
    ///
    /// A title that fits is rendered left-justified and the cycle resets; an
    /// overflowing title scrolls through `len + window` positions with blank
    /// columns separating the wrap.
    pub fn render(&mut self, title: &str, now_ms: u64, line: &mut [u8]) {
        let bytes = title.as_bytes();
        let window = line.len();
        let len = bytes.len();

        if len <= window {
            for (i, cell) in line.iter_mut().enumerate() {
                *cell = bytes.get(i).copied().unwrap_or(b' ');
            }
            self.reset(now_ms);
            return;
        }

        if self.dwelling {
            Self::fill_tail(bytes, line);
            if now_ms.saturating_sub(self.dwell_start_ms) >= SCROLL_DWELL_MS {
                self.dwelling = false;
                self.offset = 0;
                self.last_step_ms = now_ms;
            }
            return;
        }

        if now_ms.saturating_sub(self.last_step_ms) >= SCROLL_STEP_MS {
            self.last_step_ms = now_ms;
            self.offset = self.offset.saturating_add(1);
        }

        let cycle = len.saturating_add(window);
        if self.offset == len {
            // End of the title just left the window: freeze on the final
            // view and start the dwell.
            self.dwelling = true;
            self.dwell_start_ms = now_ms;
            Self::fill_tail(bytes, line);
            return;
        }
        if self.offset >= cycle {
            self.offset = 0;
        }

        #[allow(clippy::arithmetic_side_effects)] // Safety: cycle = len + window >= 1 since len > window
        for (i, cell) in line.iter_mut().enumerate() {
            let idx = self.offset.saturating_add(i) % cycle;
            *cell = if idx < len {
                bytes.get(idx).copied().unwrap_or(b' ')
            } else {
                b' '
            };
        }
    }

    /// Final `window` characters of the title, flush left.
    fn fill_tail(bytes: &[u8], line: &mut [u8]) {
        let window = line.len();
        let start = bytes.len().saturating_sub(window);
        for (i, cell) in line.iter_mut().enumerate() {
            *cell = bytes.get(start.saturating_add(i)).copied().unwrap_or(b' ');
        }
    }
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new()
    }
}
