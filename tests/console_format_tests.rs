//! Formatter tests

use rust_usart_console::{SerialConsole, SerialPortIo};

/// Capture-only port: everything transmitted lands in `tx`.
struct CapturePort {
    tx: Vec<u8>,
}

impl SerialPortIo for CapturePort {
    fn tx_ready(&self) -> bool {
        true
    }

    fn rx_ready(&self) -> bool {
        false
    }

    fn write_data(&mut self, byte: u8) {
        self.tx.push(byte);
    }

    fn read_data(&mut self) -> u8 {
        0
    }
}

fn render_int(value: i32, base: u32) -> String {
    let mut console = SerialConsole::new(CapturePort { tx: Vec::new() });
    console.put_int(value, base);
    String::from_utf8(console.into_port().tx).unwrap()
}

fn render_hex(value: u32, places: u32) -> String {
    let mut console = SerialConsole::new(CapturePort { tx: Vec::new() });
    console.put_hex(value, places);
    String::from_utf8(console.into_port().tx).unwrap()
}

#[test]
fn test_put_int_decimal() {
    assert_eq!(render_int(0, 10), "0");
    assert_eq!(render_int(42, 10), "42");
    assert_eq!(render_int(-42, 10), "-42");
    assert_eq!(render_int(i32::MAX, 10), "2147483647");
}

#[test]
fn test_put_int_min_value() {
    // unsigned_abs keeps the magnitude exact
    assert_eq!(render_int(i32::MIN, 10), "-2147483648");
    assert_eq!(render_int(i32::MIN, 16), "-80000000");
}

#[test]
fn test_put_int_hex_is_lowercase() {
    assert_eq!(render_int(255, 16), "ff");
    assert_eq!(render_int(0xABC, 16), "abc");
}

#[test]
fn test_put_int_binary() {
    assert_eq!(render_int(5, 2), "101");
    assert_eq!(render_int(-1, 2), "-1");
}

#[test]
fn test_put_int_odd_bases() {
    assert_eq!(render_int(255, 8), "377");
    assert_eq!(render_int(35, 12), "2b");
}

#[test]
fn test_put_hex_in_window() {
    assert_eq!(render_hex(0x1234, 4), "1234");
    assert_eq!(render_hex(0, 1), "0");
}

#[test]
fn test_put_hex_zero_pads() {
    assert_eq!(render_hex(0x7, 4), "0007");
}

#[test]
fn test_put_hex_is_uppercase() {
    assert_eq!(render_hex(0xABCDEF, 6), "ABCDEF");
}

#[test]
fn test_put_hex_overflow_marks_whole_field() {
    // Bits above the 16-bit window: every position becomes a period.
    assert_eq!(render_hex(0x10000, 4), "....");
    // Even when the low digits alone would fit.
    assert_eq!(render_hex(0x1F, 1), ".");
}

#[test]
fn test_put_hex_eight_places_never_overflows() {
    assert_eq!(render_hex(0xDEADBEEF, 8), "DEADBEEF");
    assert_eq!(render_hex(u32::MAX, 8), "FFFFFFFF");
}
