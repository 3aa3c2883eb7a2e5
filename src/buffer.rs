// src/buffer.rs

//! Low-level character grid access abstractions.
//!
//! This module introduces the [`CellBuffer`] trait so that the console
//! writer can target any backing storage—from the classic text-mode
//! buffer at `0xB8000` to an ordinary in-memory grid for testing or
//! non-x86 targets.

use crate::constants::{BUFFER_HEIGHT, BUFFER_WIDTH, CELL_COUNT, TEXT_BUFFER_ADDR};
use core::ptr::NonNull;

/// Errors that can occur when accessing the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// A row, column or cell index lies outside the visible grid.
    OutOfBounds,
}

impl ConsoleError {
    /// Convert the error into a human-readable static message.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfBounds => "position out of bounds",
        }
    }
}

/// One character cell: an 8-bit glyph code paired with an attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Glyph code (code page 437)
    pub glyph: u8,
    /// Packed color attribute
    pub attr: u8,
}

impl Cell {
    /// Create a cell from a glyph and an attribute byte
    #[must_use]
    pub const fn new(glyph: u8, attr: u8) -> Self {
        Self { glyph, attr }
    }

    /// A blank cell (space glyph) carrying the given attribute
    #[must_use]
    pub const fn blank(attr: u8) -> Self {
        Self::new(b' ', attr)
    }

    /// Encode into the hardware cell layout: glyph in the low byte,
    /// attribute in the high byte.
    #[must_use]
    pub const fn encode(self) -> u16 {
        (self.attr as u16) << 8 | self.glyph as u16
    }

    /// Decode from the hardware cell layout
    #[must_use]
    pub const fn decode(raw: u16) -> Self {
        Self {
            glyph: raw as u8,
            attr: (raw >> 8) as u8,
        }
    }
}

/// Abstraction over the character grid storage.
///
/// Cells are addressed by their row-major linear index
/// (`index = col + BUFFER_WIDTH * row`).
pub trait CellBuffer {
    /// Total number of addressable character cells.
    fn capacity(&self) -> usize {
        CELL_COUNT
    }

    /// Read the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::OutOfBounds`] when `index` is outside the
    /// grid.
    fn read_cell(&self, index: usize) -> Result<Cell, ConsoleError>;

    /// Write `cell` to the slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::OutOfBounds`] if the index is invalid.
    fn write_cell(&mut self, index: usize, cell: Cell) -> Result<(), ConsoleError>;

    /// Copy `count` cells starting at `src` into the region beginning at
    /// `dst`. The ranges may overlap.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::OutOfBounds`] if either range lies outside
    /// the grid.
    fn copy_cells(&mut self, src: usize, dst: usize, count: usize) -> Result<(), ConsoleError>;

    /// Fill an entire row with `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::OutOfBounds`] if the row exceeds the
    /// display.
    fn fill_row(&mut self, row: usize, cell: Cell) -> Result<(), ConsoleError>;
}

/// Concrete backend that talks to the memory-mapped text-mode buffer.
///
/// Every access goes through volatile reads and writes: the region is
/// hardware-rendered output, so the compiler must not reorder or elide
/// them.
#[derive(Clone, Copy)]
pub struct TextBuffer {
    ptr: NonNull<u16>,
}

impl TextBuffer {
    /// Construct a backend over the canonical text-mode region.
    #[must_use]
    pub const fn new() -> Self {
        // SAFETY: 0xB8000 is the canonical VGA text buffer address.
        unsafe { Self::at(TEXT_BUFFER_ADDR) }
    }

    /// Construct a backend over an arbitrary base address.
    ///
    /// # Safety
    ///
    /// `addr` must be non-null and point to a mapped, writable region of
    /// at least [`CELL_COUNT`] 16-bit cells that stays valid for the
    /// lifetime of the returned value.
    #[must_use]
    pub const unsafe fn at(addr: usize) -> Self {
        Self {
            ptr: unsafe { NonNull::new_unchecked(addr as *mut u16) },
        }
    }

    #[inline]
    const fn is_valid_index(index: usize) -> bool {
        index < CELL_COUNT
    }
}

// SAFETY: the backend is a bare pointer to the always-mapped text-mode
// region; exclusive access is enforced by the Mutex around the console.
unsafe impl Send for TextBuffer {}
unsafe impl Sync for TextBuffer {}

impl CellBuffer for TextBuffer {
    fn read_cell(&self, index: usize) -> Result<Cell, ConsoleError> {
        if !Self::is_valid_index(index) {
            return Err(ConsoleError::OutOfBounds);
        }

        let raw = unsafe { core::ptr::read_volatile(self.ptr.as_ptr().add(index)) };
        Ok(Cell::decode(raw))
    }

    fn write_cell(&mut self, index: usize, cell: Cell) -> Result<(), ConsoleError> {
        if !Self::is_valid_index(index) {
            return Err(ConsoleError::OutOfBounds);
        }

        unsafe {
            core::ptr::write_volatile(self.ptr.as_ptr().add(index), cell.encode());
            core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
        }
        Ok(())
    }

    fn copy_cells(&mut self, src: usize, dst: usize, count: usize) -> Result<(), ConsoleError> {
        if count == 0 {
            return Ok(());
        }

        let src_end = src.checked_add(count).ok_or(ConsoleError::OutOfBounds)?;
        let dst_end = dst.checked_add(count).ok_or(ConsoleError::OutOfBounds)?;

        if src_end > CELL_COUNT || dst_end > CELL_COUNT {
            return Err(ConsoleError::OutOfBounds);
        }

        unsafe {
            // ptr::copy handles overlapping ranges correctly.
            core::ptr::copy(
                self.ptr.as_ptr().add(src),
                self.ptr.as_ptr().add(dst),
                count,
            );
        }
        Ok(())
    }

    fn fill_row(&mut self, row: usize, cell: Cell) -> Result<(), ConsoleError> {
        if row >= BUFFER_HEIGHT {
            return Err(ConsoleError::OutOfBounds);
        }

        let start = row * BUFFER_WIDTH;
        for offset in 0..BUFFER_WIDTH {
            self.write_cell(start + offset, cell)?;
        }
        Ok(())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid backed by ordinary memory, for tests and non-x86 targets.
#[derive(Clone)]
pub struct MemoryBuffer {
    cells: [u16; CELL_COUNT],
}

impl MemoryBuffer {
    /// Create a zeroed in-memory grid
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }
}

impl CellBuffer for MemoryBuffer {
    fn read_cell(&self, index: usize) -> Result<Cell, ConsoleError> {
        self.cells
            .get(index)
            .copied()
            .map(Cell::decode)
            .ok_or(ConsoleError::OutOfBounds)
    }

    fn write_cell(&mut self, index: usize, cell: Cell) -> Result<(), ConsoleError> {
        self.cells
            .get_mut(index)
            .map(|slot| {
                *slot = cell.encode();
            })
            .ok_or(ConsoleError::OutOfBounds)
    }

    fn copy_cells(&mut self, src: usize, dst: usize, count: usize) -> Result<(), ConsoleError> {
        if src.checked_add(count).is_none_or(|end| end > CELL_COUNT)
            || dst.checked_add(count).is_none_or(|end| end > CELL_COUNT)
        {
            return Err(ConsoleError::OutOfBounds);
        }

        // Manual ascending copy to avoid pulling in heap allocation in
        // no_std builds; safe for the overlapping shift-up case because
        // each destination precedes its source.
        let mut idx = 0;
        while idx < count {
            let value = self.cells[src + idx];
            self.cells[dst + idx] = value;
            idx += 1;
        }
        Ok(())
    }

    fn fill_row(&mut self, row: usize, cell: Cell) -> Result<(), ConsoleError> {
        if row >= BUFFER_HEIGHT {
            return Err(ConsoleError::OutOfBounds);
        }
        let start = row * BUFFER_WIDTH;
        let raw = cell.encode();
        for offset in 0..BUFFER_WIDTH {
            self.cells[start + offset] = raw;
        }
        Ok(())
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "x86_64")]
pub type DefaultBuffer = TextBuffer;

#[cfg(not(target_arch = "x86_64"))]
pub type DefaultBuffer = MemoryBuffer;
