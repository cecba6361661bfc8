//! Device traits
//!
//! The dispatcher drives these; chip-side crates implement them.

pub mod buzzer;
pub mod led;

pub use buzzer::{Buzzer, NoBuzzer};
pub use led::{LedStrip, Rgb};
