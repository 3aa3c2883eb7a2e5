//! End-to-end emission scenarios against the in-memory backend.

use vga_console::{
    Cell, Color, ColorCode, Console, Cursor, MemoryBuffer, BUFFER_HEIGHT, BUFFER_WIDTH,
};

fn cleared_console() -> Console<MemoryBuffer> {
    let mut console = Console::with_buffer(MemoryBuffer::new());
    console.clear().unwrap();
    console
}

#[test]
fn writes_land_where_the_cursor_says() {
    let mut console = cleared_console();
    console.write_cstr(b"AB\nC");

    let default_attr = ColorCode::DEFAULT.as_u8();
    assert_eq!(console.cell_at(0, 0).unwrap(), Cell::new(b'A', default_attr));
    assert_eq!(console.cell_at(0, 1).unwrap(), Cell::new(b'B', default_attr));
    assert_eq!(console.cell_at(1, 0).unwrap(), Cell::new(b'C', default_attr));
    assert_eq!(console.cursor(), Cursor { col: 1, row: 1 });
}

#[test]
fn full_screen_scrolls_one_line_per_newline() {
    let mut console = cleared_console();

    // Fill all 25 rows with distinct markers.
    for row in 0..BUFFER_HEIGHT {
        console.write_byte(b'0' + (row % 10) as u8);
        if row + 1 < BUFFER_HEIGHT {
            console.write_byte(b'\n');
        }
    }

    console.write_byte(b'\n');

    for row in 0..BUFFER_HEIGHT - 1 {
        let expected = b'0' + ((row + 1) % 10) as u8;
        assert_eq!(console.cell_at(row, 0).unwrap().glyph, expected);
    }
    let attr = console.color().as_u8();
    for col in 0..BUFFER_WIDTH {
        assert_eq!(
            console.cell_at(BUFFER_HEIGHT - 1, col).unwrap(),
            Cell::blank(attr)
        );
    }
}

#[test]
fn long_output_wraps_and_scrolls_without_losing_tail() {
    let mut console = cleared_console();

    // Three full screens of 'x' in a single unbroken stream.
    for _ in 0..BUFFER_WIDTH * BUFFER_HEIGHT * 3 {
        console.write_byte(b'x');
    }

    // Every visible cell is an 'x' and the cursor sits at the end of
    // the last row.
    for row in 0..BUFFER_HEIGHT {
        for col in 0..BUFFER_WIDTH {
            assert_eq!(console.cell_at(row, col).unwrap().glyph, b'x');
        }
    }
    assert_eq!(
        console.cursor(),
        Cursor { col: BUFFER_WIDTH, row: BUFFER_HEIGHT - 1 }
    );
}

#[test]
fn colored_banner_then_plain_text() {
    let mut console = cleared_console();

    console.set_color(Color::Yellow, Color::Blue);
    console.write_cstr(b"boot ok\n");
    console.set_color(Color::White, Color::Black);
    console.write_cstr(b"ready");

    let banner_attr = ColorCode::new(Color::Yellow, Color::Blue).as_u8();
    let plain_attr = ColorCode::new(Color::White, Color::Black).as_u8();
    assert_eq!(console.cell_at(0, 0).unwrap(), Cell::new(b'b', banner_attr));
    assert_eq!(console.cell_at(0, 6).unwrap(), Cell::new(b'k', banner_attr));
    assert_eq!(console.cell_at(1, 0).unwrap(), Cell::new(b'r', plain_attr));
}

#[test]
fn clear_with_new_color_repaints_background() {
    let mut console = cleared_console();
    console.write_cstr(b"old content");

    console.set_color(Color::LightGray, Color::Blue);
    console.clear().unwrap();

    let attr = ColorCode::new(Color::LightGray, Color::Blue).as_u8();
    for row in 0..BUFFER_HEIGHT {
        for col in 0..BUFFER_WIDTH {
            assert_eq!(console.cell_at(row, col).unwrap(), Cell::blank(attr));
        }
    }
}

#[test]
fn formatted_output_through_fmt_write() {
    use core::fmt::Write;

    let mut console = cleared_console();
    writeln!(console, "heap: {:#x} bytes", 0x1000).unwrap();
    write!(console, "done").unwrap();

    assert_eq!(console.cell_at(0, 0).unwrap().glyph, b'h');
    assert_eq!(console.cell_at(1, 0).unwrap().glyph, b'd');
    assert_eq!(console.cursor(), Cursor { col: 4, row: 1 });
}
