// src/constants.rs

//! Constants for text-mode buffer operations

/// Text-mode buffer physical memory address
pub const TEXT_BUFFER_ADDR: usize = 0xb8000;

/// Screen dimensions
pub const BUFFER_WIDTH: usize = 80;
pub const BUFFER_HEIGHT: usize = 25;

/// Total number of addressable character cells
pub const CELL_COUNT: usize = BUFFER_WIDTH * BUFFER_HEIGHT;

/// ASCII character range for printable characters
pub const PRINTABLE_ASCII_START: u8 = 0x20;
pub const PRINTABLE_ASCII_END: u8 = 0x7e;

/// Replacement character for non-printable characters (■)
pub const REPLACEMENT_CHAR: u8 = 0xfe;
