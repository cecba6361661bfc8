//! Board-agnostic panel logic
//!
//! Everything between the pins and the wire that does not depend on the
//! chip:
//!
//! - Device traits for the LED strips and the buzzer
//! - Edge-triggered button monitor
//! - Command registry and dispatcher
//! - Panel and board configuration
//! - The [`Panel`](panel::Panel) coordinator tying them together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buttons;
pub mod config;
pub mod dispatch;
pub mod panel;
pub mod traits;

pub use panel::{Handled, Panel, Rejected};
