//! Hardware port boundary
//!
//! The console core never touches registers directly; it talks to exactly
//! one active peripheral through this trait. Firmware supplies a real UART
//! backend (see [`crate::uart`]), tests supply scripted fakes.

/// Raw access to one serial peripheral: two status predicates plus the
/// data register.
///
/// Contract: `read_data` is only called after `rx_ready` returned `true`,
/// and `write_data` only after `tx_ready` returned `true`. Both predicates
/// must be cheap - the console spins on them.
pub trait SerialPortIo {
    /// Transmit register empty - a byte may be written.
    fn tx_ready(&self) -> bool;

    /// Receive register non-empty - a byte is waiting.
    fn rx_ready(&self) -> bool;

    /// Write one byte to the data register.
    fn write_data(&mut self, byte: u8);

    /// Read one byte from the data register.
    fn read_data(&mut self) -> u8;
}
