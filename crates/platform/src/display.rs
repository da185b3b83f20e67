//! Character display bus abstraction.
//!
//! The bus is a single exclusive resource: all writers must hold the display
//! lock (an `embassy_sync` mutex owned by the `app` crate) for the duration
//! of a frame write. This trait is deliberately byte-oriented — frame
//! composition happens in the `ui` crate, off the bus.

/// Custom glyph slot for the filled progress-bar cell.
pub const GLYPH_BAR: u8 = 0x00;

/// Custom glyph slot for the note marker in the title line's last column.
pub const GLYPH_NOTE: u8 = 0x01;

/// Number of custom glyph slots reserved by the player.
pub const GLYPH_SLOTS: u8 = 2;

/// 16×2 character display bus.
pub trait CharDisplay {
    /// Move the write cursor to `(col, row)`.
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Write one custom glyph by CGRAM slot code.
    fn write_glyph(&mut self, code: u8);

    /// Write one printable ASCII character at the cursor.
    fn write_char(&mut self, c: u8);
}

/// Write one composed line, dispatching glyph slots vs. printable bytes.
///
/// Bytes below [`GLYPH_SLOTS`] address CGRAM; everything else is ASCII.
pub fn write_line<D: CharDisplay>(display: &mut D, row: u8, line: &[u8]) {
    display.set_cursor(0, row);
    for &b in line {
        if b < GLYPH_SLOTS {
            display.write_glyph(b);
        } else {
            display.write_char(b);
        }
    }
}
