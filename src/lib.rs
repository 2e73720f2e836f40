//! # RustUsartConsole
//!
//! Polling-mode USART console for microcontroller firmware: blocking
//! character I/O, numeric formatting and line-buffered input over one
//! hardware serial port.
//!
//! ## Architecture
//!
//! Everything flows through a single owned [`SerialConsole`] wrapping a
//! [`SerialPortIo`] backend:
//! - Transmit and receive spin on the hardware status flags, nothing yields
//! - The line editor, formatter and poll probe share those two primitives
//! - Backends are injectable: a real UART on the chip, scripted fakes in tests
//!
//! No heap allocation, no interrupts, no tasks - a single caller polls.

#![cfg_attr(not(test), no_std)]

pub mod console;
pub mod port;

#[cfg(target_os = "espidf")]
pub mod uart;

pub use console::SerialConsole;
pub use port::SerialPortIo;

#[cfg(target_os = "espidf")]
pub use uart::{UsartConfig, UsartPort};
