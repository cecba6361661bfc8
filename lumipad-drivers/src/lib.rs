//! Hardware driver implementations
//!
//! Concrete actuators built on `lumipad-hal` output pins:
//!
//! - Buzzer (implements `lumipad_core::traits::Buzzer`)
//! - LED supply switch

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod power;

pub use buzzer::GpioBuzzer;
pub use power::LedPower;
