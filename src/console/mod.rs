//! Serial console core
//!
//! Blocking character I/O, numeric formatting and line editing over a
//! single polled port. Zero heap allocation - every buffer is caller-owned
//! or on the stack.

pub mod format;
pub mod line;

use crate::port::SerialPortIo;

/// Console over one owned serial port.
///
/// Owns the active port for its whole lifetime: construct once after the
/// peripheral is initialized, then pass by `&mut` wherever I/O happens.
/// This replaces the usual "global port pointer" pattern - there is no
/// hidden state to forget to set.
pub struct SerialConsole<P: SerialPortIo> {
    port: P,
}

impl<P: SerialPortIo> SerialConsole<P> {
    /// Take ownership of an initialized port.
    pub const fn new(port: P) -> Self {
        Self { port }
    }

    /// Release the underlying port.
    pub fn into_port(self) -> P {
        self.port
    }

    /// Write a single byte, spinning until the transmit register is empty.
    pub fn put_char(&mut self, c: u8) {
        while !self.port.tx_ready() {}
        self.port.write_data(c);
    }

    /// Read a single byte, spinning until one arrives.
    ///
    /// Blocks indefinitely - there is no timeout. The byte is not echoed.
    pub fn get_char(&mut self) -> u8 {
        while !self.port.rx_ready() {}
        self.port.read_data()
    }

    /// Write every byte of `s`, in order.
    ///
    /// No trailing newline and no CR/LF translation; the bytes go out raw.
    pub fn put_str(&mut self, s: &str) {
        for b in s.bytes() {
            self.put_char(b);
        }
    }

    /// Check for a pending byte without blocking.
    ///
    /// Returns `None` immediately when the receive register is empty. This
    /// is the one receive call that keeps the caller responsive to other
    /// work; a received NUL arrives as `Some(0)`, unambiguously.
    pub fn poll_char(&mut self) -> Option<u8> {
        if self.port.rx_ready() {
            Some(self.port.read_data())
        } else {
            None
        }
    }
}

/// Lets firmware use `write!`/`writeln!` on the console directly.
impl<P: SerialPortIo> core::fmt::Write for SerialConsole<P> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.put_str(s);
        Ok(())
    }
}
