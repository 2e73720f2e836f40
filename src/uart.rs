//! ESP-IDF UART backend
//!
//! Maps the [`SerialPortIo`] boundary onto the IDF UART driver. Which
//! physical port the console uses is decided by the peripheral instance
//! passed to [`UsartPort::new`] (UART0, UART1, ...), together with the
//! TX/RX pins.
//!
//! # Hardware Setup
//!
//! ```text
//! chip TX pin ──────▶ USB-UART RX ──▶ PC terminal program
//! chip RX pin ◀────── USB-UART TX ◀── keyboard input
//! ```

use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::uart::{self, UartDriver};
use esp_idf_svc::hal::units::Hertz;
use esp_idf_svc::sys::EspError;

use crate::port::SerialPortIo;

/// UART configuration for the console.
pub struct UsartConfig {
    pub baud_rate: u32,
}

impl Default for UsartConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
        }
    }
}

/// One initialized UART peripheral, ready to back a console.
pub struct UsartPort<'d> {
    driver: UartDriver<'d>,
}

impl<'d> UsartPort<'d> {
    /// Configure a UART instance with the given TX/RX pins and baud rate.
    ///
    /// Call exactly once per port, before any console operation runs on it.
    pub fn new(
        usart: impl Peripheral<P = impl uart::Uart> + 'd,
        tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
        rx_pin: impl Peripheral<P = impl gpio::InputPin> + 'd,
        config: &UsartConfig,
    ) -> Result<Self, EspError> {
        let uart_config = uart::config::Config::default().baudrate(Hertz(config.baud_rate));

        let driver = UartDriver::new(
            usart,
            tx_pin,
            rx_pin,
            Option::<gpio::AnyIOPin>::None, // CTS
            Option::<gpio::AnyIOPin>::None, // RTS
            &uart_config,
        )?;

        Ok(Self { driver })
    }
}

impl SerialPortIo for UsartPort<'_> {
    fn tx_ready(&self) -> bool {
        // The IDF driver owns the TX FIFO and blocks inside write_data
        // until space frees up, so transmit always reports ready here.
        true
    }

    fn rx_ready(&self) -> bool {
        self.driver.remaining_read().map(|n| n > 0).unwrap_or(false)
    }

    fn write_data(&mut self, byte: u8) {
        let _ = self.driver.write(&[byte]);
    }

    fn read_data(&mut self) -> u8 {
        let mut byte = [0u8; 1];
        // Zero timeout: only called once rx_ready saw a pending byte.
        match self.driver.read(&mut byte, 0) {
            Ok(1) => byte[0],
            _ => 0,
        }
    }
}
