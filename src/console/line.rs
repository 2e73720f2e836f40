//! Line-buffered input with in-place editing
//!
//! A two-state editor over the blocking character primitives: *editing*
//! until Enter arrives, then *done*. The buffer is caller-owned and never
//! retained.

use super::SerialConsole;
use crate::port::SerialPortIo;

/// Carriage return ends the line.
const CR: u8 = 13;

/// Delete code as sent by most serial terminals for the backspace key.
const DEL: u8 = 127;

impl<P: SerialPortIo> SerialConsole<P> {
    /// Read one line into `buf`, echoing as the user types.
    ///
    /// Printable ASCII (0x20-0x7E) is appended and echoed until the buffer
    /// holds `buf.len() - 1` bytes; after that only backspace and Enter are
    /// recognized. DEL (127) drops the last byte and is echoed raw -
    /// rendering is up to the terminal, the dropped byte stays in the
    /// buffer past the logical end. Enter (CR) finishes the line without
    /// echo. Anything else is ignored outright.
    ///
    /// The line is NUL-terminated in `buf`; the returned length excludes
    /// the terminator and is always less than `buf.len()`. An empty `buf`
    /// still consumes input until Enter and returns 0 without writing.
    pub fn read_line(&mut self, buf: &mut [u8]) -> usize {
        let limit = buf.len().saturating_sub(1);
        let mut cursor = 0;

        loop {
            let c = self.get_char();
            match c {
                CR => break,
                0x20..=0x7E if cursor < limit => {
                    buf[cursor] = c;
                    cursor += 1;
                    self.put_char(c);
                }
                DEL if cursor > 0 => {
                    cursor -= 1;
                    self.put_char(DEL);
                }
                // Printable at capacity, backspace on an empty line, and
                // every other control byte: no echo, no state change.
                _ => {}
            }
        }

        if let Some(end) = buf.get_mut(cursor) {
            *end = 0;
        }
        cursor
    }
}
