//! RP2040-specific HAL for the panel firmware
//!
//! Implements the `lumipad-hal` and `lumipad-core` device traits on top of
//! embassy-rp:
//!
//! - Runtime pin bank, so board wiring can be chosen by GPIO number
//! - GPIO input/output adapters
//! - Buffered UART adapters for the command channel
//! - PIO-driven WS2812 strips

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pins;
pub mod uart;
pub mod ws2812;

pub use gpio::{RpInput, RpOutput};
pub use pins::{PinBank, PinError};
pub use uart::{RpUartRx, RpUartTx, UartError};
pub use ws2812::PioStrip;
