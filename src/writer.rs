// src/writer.rs

//! Console writer: cursor tracking, line wrapping, scrolling and
//! character emission with the current color attribute.

use crate::buffer::{Cell, CellBuffer, ConsoleError, DefaultBuffer};
use crate::color::{Color, ColorCode};
use crate::constants::{
    BUFFER_HEIGHT, BUFFER_WIDTH, PRINTABLE_ASCII_END, PRINTABLE_ASCII_START, REPLACEMENT_CHAR,
};
use core::fmt;

/// Cursor position within the character grid.
///
/// `row` is always in `[0, BUFFER_HEIGHT)`. `col` may momentarily equal
/// `BUFFER_WIDTH` after writing the last column of a row; the next
/// emission wraps it back to zero before touching the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Current column
    pub col: usize,
    /// Current row
    pub row: usize,
}

impl Cursor {
    /// Cursor at the top-left corner
    #[must_use]
    pub const fn new() -> Self {
        Self { col: 0, row: 0 }
    }

    /// Linear cell index of this position
    const fn index(self) -> usize {
        self.row * BUFFER_WIDTH + self.col
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// A writer that emits 8-bit characters into a character grid, tracking
/// cursor position and the current color attribute.
///
/// The writer is generic over its [`CellBuffer`] backend so the same
/// cursor and scrolling logic drives both the hardware text-mode buffer
/// and an in-memory grid.
pub struct Console<B: CellBuffer = DefaultBuffer> {
    cursor: Cursor,
    color: ColorCode,
    buffer: B,
}

impl Console<DefaultBuffer> {
    /// Console over the default backend for this target
    #[must_use]
    pub const fn new() -> Self {
        Self::with_buffer(DefaultBuffer::new())
    }
}

impl Default for Console<DefaultBuffer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CellBuffer> Console<B> {
    /// Console over an explicit backend, starting at the top-left corner
    /// with the default white-on-black color scheme.
    #[must_use]
    pub const fn with_buffer(buffer: B) -> Self {
        Self {
            cursor: Cursor::new(),
            color: ColorCode::DEFAULT,
            buffer,
        }
    }

    /// Current cursor position
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current color attribute
    #[must_use]
    pub const fn color(&self) -> ColorCode {
        self.color
    }

    /// Set the color applied to all subsequent cell writes.
    ///
    /// Already-written cells keep their attribute.
    pub fn set_color(&mut self, fg: Color, bg: Color) {
        self.color = ColorCode::new(fg, bg);
    }

    /// Set the color from a pre-packed attribute
    pub fn set_color_code(&mut self, color: ColorCode) {
        self.color = color;
    }

    /// Read back the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::OutOfBounds`] if the position is outside
    /// the visible grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, ConsoleError> {
        if row >= BUFFER_HEIGHT || col >= BUFFER_WIDTH {
            return Err(ConsoleError::OutOfBounds);
        }
        self.buffer.read_cell(row * BUFFER_WIDTH + col)
    }

    /// Overwrite every cell in `row` with a blank carrying the current
    /// color attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::OutOfBounds`] if the row exceeds the
    /// display.
    pub fn clear_row(&mut self, row: usize) -> Result<(), ConsoleError> {
        self.buffer.fill_row(row, Cell::blank(self.color.as_u8()))
    }

    /// Blank the entire display, top row first.
    ///
    /// Cursor and color state are left untouched; resetting them is a
    /// separate concern.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::OutOfBounds`] if the backend rejects a
    /// row, which cannot happen for a full-size grid.
    pub fn clear(&mut self) -> Result<(), ConsoleError> {
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row)?;
        }
        Ok(())
    }

    /// Move the cursor to the start of the next line, scrolling the
    /// grid up one row when already on the last line.
    pub fn newline(&mut self) {
        self.cursor.col = 0;

        if self.cursor.row + 1 < BUFFER_HEIGHT {
            self.cursor.row += 1;
            return;
        }

        // On the last row: shift everything up to make room. Rows are
        // walked top to bottom so each one is read before the next
        // iteration overwrites it; no temporary buffer is needed.
        for row in 1..BUFFER_HEIGHT {
            let _ = self
                .buffer
                .copy_cells(row * BUFFER_WIDTH, (row - 1) * BUFFER_WIDTH, BUFFER_WIDTH);
        }
        let _ = self.clear_row(BUFFER_HEIGHT - 1);
    }

    /// Emit one 8-bit character at the cursor.
    ///
    /// A newline byte moves the cursor without writing a cell. Any other
    /// byte is written with the current color attribute and advances the
    /// column, wrapping to the next line first if the cursor sits at the
    /// row width (so every write stays inside the row).
    pub fn write_byte(&mut self, byte: u8) {
        match byte {
            b'\n' => self.newline(),
            byte => {
                if self.cursor.col >= BUFFER_WIDTH {
                    self.newline();
                }
                let cell = Cell::new(byte, self.color.as_u8());
                let _ = self.buffer.write_cell(self.cursor.index(), cell);
                self.cursor.col += 1;
            }
        }
    }

    /// Emit a NUL-terminated byte sequence.
    ///
    /// Each byte up to (not including) the first NUL goes through
    /// [`Console::write_byte`]. A sequence without a NUL is emitted in
    /// full.
    pub fn write_cstr(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if byte == 0 {
                return;
            }
            self.write_byte(byte);
        }
    }

    /// Emit a string, substituting bytes outside the printable ASCII
    /// range with a replacement glyph.
    pub fn write_string(&mut self, s: &str) {
        for byte in s.bytes() {
            match byte {
                PRINTABLE_ASCII_START..=PRINTABLE_ASCII_END | b'\n' => self.write_byte(byte),
                _ => self.write_byte(REPLACEMENT_CHAR),
            }
        }
    }

    /// Emit a string in the given color, then restore the previous one
    pub fn write_colored(&mut self, s: &str, color: ColorCode) {
        let old_color = self.color;
        self.color = color;
        self.write_string(s);
        self.color = old_color;
    }
}

impl<B: CellBuffer> fmt::Write for Console<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s);
        Ok(())
    }
}
