//! Numeric output formatting
//!
//! Integer and fixed-width hex rendering straight to the port. Digits are
//! built in small stack buffers - no allocation, no core::fmt machinery.

use super::SerialConsole;
use crate::port::SerialPortIo;

/// Worst case for [`SerialConsole::put_int`]: sign plus 32 binary digits.
const INT_BUF_LEN: usize = 33;

impl<P: SerialPortIo> SerialConsole<P> {
    /// Write `value` in the given `base` (2-16), most significant digit
    /// first.
    ///
    /// Negative values get a leading `-` in every base, with the magnitude
    /// computed so `i32::MIN` renders exactly. Digits above 9 are lowercase:
    /// `put_int(255, 16)` prints `ff`.
    pub fn put_int(&mut self, value: i32, base: u32) {
        debug_assert!((2..=16).contains(&base));
        let base = base.clamp(2, 16);

        let mut rest = value.unsigned_abs();

        // Digits are produced least significant first, so fill the buffer
        // back to front and emit the tail.
        let mut buf = [0u8; INT_BUF_LEN];
        let mut pos = INT_BUF_LEN;

        loop {
            let digit = (rest % base) as u8;
            assert!(pos > 0);
            pos -= 1;
            buf[pos] = if digit < 10 {
                b'0' + digit
            } else {
                b'a' + digit - 10
            };
            rest /= base;
            if rest == 0 {
                break;
            }
        }

        if value < 0 {
            assert!(pos > 0);
            pos -= 1;
            buf[pos] = b'-';
        }

        for &b in &buf[pos..] {
            self.put_char(b);
        }
    }

    /// Write exactly `places` (1-8) uppercase hex digits of `value`, most
    /// significant nibble first.
    ///
    /// If any bit above the `places * 4` window is set, every digit
    /// position prints `.` instead - the whole field is overflow-marked,
    /// not just the high digits. The window test happens once per call.
    pub fn put_hex(&mut self, value: u32, places: u32) {
        debug_assert!((1..=8).contains(&places));
        let places = places.clamp(1, 8);

        // Eight places always fit a u32, and shifting by 32 would be
        // undefined anyway.
        let out_of_bounds = if places >= 8 {
            0
        } else {
            value >> (places * 4)
        };

        for x in (0..places).rev() {
            if out_of_bounds != 0 {
                self.put_char(b'.');
            } else {
                let digit = ((value >> (x * 4)) & 0xF) as u8;
                self.put_char(if digit < 10 {
                    b'0' + digit
                } else {
                    b'A' + digit - 10
                });
            }
        }
    }
}
