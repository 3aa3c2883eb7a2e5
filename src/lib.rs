// src/lib.rs

//! Text-mode console driver for the legacy 80x25 character display
//!
//! This crate provides direct output to the memory-mapped text-mode
//! buffer with the following features:
//! - 16-color support (standard 4-bit palette)
//! - Cursor tracking with line wrapping
//! - Auto-scrolling when the screen is full
//! - fmt::Write trait implementation for print!/println! macros
//! - Interrupt-safe locking around the global console
//! - Pluggable backend so the writer can be exercised off-target
//!
//! Hardware mode setup is out of scope: the text-mode region is assumed
//! to be mapped and writable for the lifetime of the kernel.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

mod buffer;
mod color;
mod constants;
mod writer;

pub use buffer::{Cell, CellBuffer, ConsoleError, DefaultBuffer, MemoryBuffer, TextBuffer};
pub use color::{Color, ColorCode};
pub use constants::{BUFFER_HEIGHT, BUFFER_WIDTH, CELL_COUNT, TEXT_BUFFER_ADDR};
pub use writer::{Console, Cursor};

use core::fmt;
use spin::Mutex;

/// Global console writer protected by a Mutex.
///
/// All accesses go through [`with_console`], which disables interrupts
/// for the duration of the lock so an interrupt handler printing in the
/// middle of a write cannot deadlock.
static CONSOLE: Mutex<Console> = Mutex::new(Console::new());

/// Execute a function with the global console locked.
fn with_console<F, R>(f: F) -> R
where
    F: FnOnce(&mut Console) -> R,
{
    #[cfg(target_arch = "x86_64")]
    {
        x86_64::instructions::interrupts::without_interrupts(|| f(&mut CONSOLE.lock()))
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        f(&mut CONSOLE.lock())
    }
}

/// Global print! macro
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ({
        $crate::_print(format_args!($($arg)*))
    });
}

/// Global println! macro
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($fmt:expr) => ($crate::print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::print!(concat!($fmt, "\n"), $($arg)*));
}

/// Print function called by macros
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    with_console(|console| {
        use core::fmt::Write;
        let _ = console.write_fmt(args);
    });
}

/// Blank the entire display
pub fn clear() {
    with_console(|console| {
        let _ = console.clear();
    });
}

/// Emit one 8-bit character at the cursor
pub fn write_byte(byte: u8) {
    with_console(|console| console.write_byte(byte));
}

/// Emit a NUL-terminated byte sequence
pub fn write_cstr(bytes: &[u8]) {
    with_console(|console| console.write_cstr(bytes));
}

/// Set the color applied to all subsequent output
pub fn set_color(fg: Color, bg: Color) {
    with_console(|console| console.set_color(fg, bg));
}

/// Print colored text
pub fn print_colored(s: &str, color: ColorCode) {
    with_console(|console| console.write_colored(s, color));
}
