//! Two-line frame composition for the 16×2 character display.
//!
//! Line 0: the track title (marquee-scrolled when it overflows) with the
//! note glyph fixed in the last column. Line 1: a pause banner, a progress
//! bar, or an empty bar, depending on the player state.

use platform::config::LCD_COLS;
use platform::display::{GLYPH_BAR, GLYPH_NOTE};

use crate::marquee::Marquee;
use crate::title::display_name;

/// Columns available to the title before the status glyph.
pub const CONTENT_COLS: usize = LCD_COLS - 1;

/// Label shown on the title line while idle.
pub const READY_LABEL: &str = "Ready...";

/// Banner centered on the second line while paused.
pub const PAUSED_BANNER: &str = "---PAUSED---";

/// Unfilled progress-bar cell.
pub const BAR_EMPTY: u8 = b'_';

/// Point-in-time view of the player, assembled by the display task from the
/// shared state and the track catalog.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    /// Whether a session is live (playing or paused).
    pub active: bool,
    /// Whether playback is suspended.
    pub paused: bool,
    /// Catalog path of the current track, `None` when the catalog is empty.
    pub path: Option<&'a str>,
    /// Bytes consumed by the active session.
    pub position: u32,
    /// Total bytes of the active session, 0 when unknown.
    pub size: u32,
    /// Title generation counter; a change resets the marquee.
    pub title_generation: u32,
}

/// One composed frame, ready to write under the display lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFrame {
    /// Title line (glyph codes included).
    pub line0: [u8; LCD_COLS],
    /// Progress / pause line.
    pub line1: [u8; LCD_COLS],
}

/// Stateful frame composer — owns the marquee cursor and tracks the title
/// generation it last saw.
pub struct FrameComposer {
    marquee: Marquee,
    generation_seen: u32,
}

impl FrameComposer {
    /// Composer with a fresh marquee.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marquee: Marquee::new(),
            generation_seen: 0,
        }
    }

    /// Compose one frame from `view` at time `now_ms`.
    pub fn compose(&mut self, view: &PlayerView<'_>, now_ms: u64) -> DisplayFrame {
        if view.title_generation != self.generation_seen {
            self.generation_seen = view.title_generation;
            self.marquee.reset(now_ms);
        }

        let mut line0 = [b' '; LCD_COLS];
        if let Some(content) = line0.get_mut(..CONTENT_COLS) {
            if view.active {
                let name = view.path.map(display_name).unwrap_or_default();
                self.marquee.render(name.as_str(), now_ms, content);
            } else {
                self.marquee.render(READY_LABEL, now_ms, content);
            }
        }
        if let Some(last) = line0.last_mut() {
            *last = GLYPH_NOTE;
        }

        DisplayFrame {
            line0,
            line1: Self::second_line(view),
        }
    }

    fn second_line(view: &PlayerView<'_>) -> [u8; LCD_COLS] {
        let mut line = [b' '; LCD_COLS];
        if view.paused {
            let banner = PAUSED_BANNER.as_bytes();
            let start = LCD_COLS.saturating_sub(banner.len()) / 2;
            for (i, &b) in banner.iter().enumerate() {
                if let Some(cell) = line.get_mut(start.saturating_add(i)) {
                    *cell = b;
                }
            }
            return line;
        }

        let filled = if view.active && view.size > 0 {
            // floor(position / size * width), in integer math
            let cols = u64::from(view.position)
                .saturating_mul(LCD_COLS as u64)
                .checked_div(u64::from(view.size))
                .unwrap_or(0);
            usize::try_from(cols).unwrap_or(LCD_COLS).min(LCD_COLS)
        } else {
            0
        };
        for (i, cell) in line.iter_mut().enumerate() {
            *cell = if i < filled { GLYPH_BAR } else { BAR_EMPTY };
        }
        line
    }
}

impl Default for FrameComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)] // Test slicing of fixed 16-byte lines
mod tests {
    use platform::config::LCD_COLS;
    use platform::display::{GLYPH_BAR, GLYPH_NOTE};

    use super::{DisplayFrame, FrameComposer, PlayerView, BAR_EMPTY};

    fn idle_view() -> PlayerView<'static> {
        PlayerView {
            active: false,
            paused: false,
            path: None,
            position: 0,
            size: 0,
            title_generation: 0,
        }
    }

    fn playing_view(path: &str, position: u32, size: u32) -> PlayerView<'_> {
        PlayerView {
            active: true,
            paused: false,
            path: Some(path),
            position,
            size,
            title_generation: 1,
        }
    }

    fn compose(view: &PlayerView<'_>) -> DisplayFrame {
        FrameComposer::new().compose(view, 0)
    }

    #[test]
    fn idle_shows_ready_and_empty_bar() {
        let frame = compose(&idle_view());
        assert_eq!(&frame.line0[..8], b"Ready...");
        assert!(frame.line0[8..15].iter().all(|&b| b == b' '));
        assert!(frame.line1.iter().all(|&b| b == BAR_EMPTY));
    }

    #[test]
    fn note_glyph_always_in_last_column() {
        assert_eq!(compose(&idle_view()).line0[LCD_COLS - 1], GLYPH_NOTE);
        let frame = compose(&playing_view("/Song.wav", 0, 100));
        assert_eq!(frame.line0[LCD_COLS - 1], GLYPH_NOTE);
    }

    #[test]
    fn title_is_derived_from_path() {
        let frame = compose(&playing_view("/My_Song.wav", 0, 100));
        assert_eq!(&frame.line0[..7], b"My Song");
    }

    #[test]
    fn progress_bar_fill_is_floored() {
        // 5 / 20 of 16 columns = 4 filled
        let frame = compose(&playing_view("/a.wav", 5, 20));
        let filled = frame.line1.iter().filter(|&&b| b == GLYPH_BAR).count();
        assert_eq!(filled, 4);
        assert!(frame.line1[4..].iter().all(|&b| b == BAR_EMPTY));
    }

    #[test]
    fn zero_size_renders_unfilled_bar() {
        let frame = compose(&playing_view("/a.wav", 5, 0));
        assert!(frame.line1.iter().all(|&b| b == BAR_EMPTY));
    }

    #[test]
    fn paused_centers_banner_over_blank_line() {
        let mut view = playing_view("/a.wav", 5, 20);
        view.paused = true;
        let frame = compose(&view);
        assert_eq!(&frame.line1[2..14], b"---PAUSED---");
        assert_eq!(frame.line1[0], b' ');
        assert_eq!(frame.line1[15], b' ');
    }

    #[test]
    fn generation_change_resets_marquee() {
        let long = "/A_Very_Long_Track_Name_Indeed.wav";
        let mut composer = FrameComposer::new();
        let mut view = playing_view(long, 0, 100);
        // Scroll a few columns.
        let mut now = 0;
        for _ in 0..4 {
            now += 350;
            let _ = composer.compose(&view, now);
        }
        let scrolled = composer.compose(&view, now).line0;
        view.title_generation = 2;
        let reset = composer.compose(&view, now).line0;
        assert_ne!(scrolled, reset);
        assert_eq!(&reset[..15], &compose(&view).line0[..15]);
    }
}
