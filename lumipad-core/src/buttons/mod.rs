//! Button scanning
//!
//! Buttons are sampled once per poll with no debounce filter; one differing
//! sample is a transition.

pub mod monitor;

pub use monitor::{ButtonCallback, ButtonError, ButtonMonitor};
