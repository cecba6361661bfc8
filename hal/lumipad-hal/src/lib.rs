//! Lumipad Hardware Abstraction Layer
//!
//! Pin-level traits implemented by chip-specific HALs. The panel logic in
//! `lumipad-core` only ever sees these traits, so it runs unchanged on the
//! target and in host tests.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lumipad-core / lumipad-drivers         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumipad-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumipad-hal-rp2040                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial byte transport

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

pub use gpio::{InputPin, OutputPin};
pub use uart::{UartConfig, UartRx, UartTx};
