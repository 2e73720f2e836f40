//! RustUsartConsole - firmware entry point
//!
//! Brings up one UART and runs a banner plus read-line echo loop so the
//! console can be exercised from any terminal program. The library is the
//! product; this binary is only a smoke-test harness for it.

#![cfg_attr(target_os = "espidf", no_std)]
#![cfg_attr(target_os = "espidf", no_main)]

#[cfg(target_os = "espidf")]
mod firmware {
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::sys as esp_idf_sys;

    use rust_usart_console::{SerialConsole, UsartConfig, UsartPort};

    /// Version string (set by build.rs, includes git hash)
    const VERSION: &str = env!("VERSION_STRING");

    /// Line buffer size, terminator included.
    const LINE_SIZE: usize = 80;

    #[no_mangle]
    fn main() {
        // Initialize ESP-IDF
        esp_idf_sys::link_patches();

        let peripherals = Peripherals::take().expect("peripherals already taken");

        // UART1 on GPIO6/GPIO7 leaves UART0 free for the bootloader log.
        let port = UsartPort::new(
            peripherals.uart1,
            peripherals.pins.gpio6,
            peripherals.pins.gpio7,
            &UsartConfig::default(),
        )
        .expect("UART init failed");

        let mut console = SerialConsole::new(port);

        console.put_str("\r\n\r\n*** ");
        console.put_str(VERSION);
        console.put_str(" ***\r\n");

        let mut line = [0u8; LINE_SIZE];
        loop {
            console.put_str("> ");
            let len = console.read_line(&mut line);

            console.put_str("\r\ngot ");
            console.put_int(len as i32, 10);
            console.put_str(" bytes: ");
            if let Ok(s) = core::str::from_utf8(&line[..len]) {
                console.put_str(s);
            }
            console.put_str("\r\n");
        }
    }
}

/// Host builds have no firmware entry; the console logic is covered by the
/// tests under `tests/`.
#[cfg(not(target_os = "espidf"))]
fn main() {}
