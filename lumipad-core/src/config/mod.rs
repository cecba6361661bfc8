//! Configuration types
//!
//! Both layers are fixed at build time: [`PanelConfig`] describes what the
//! host can address, [`BoardConfig`] where it is wired.

pub mod board;
pub mod panel;

pub use board::{BoardConfig, Revision, BUTTON_COUNT, GPIO_COUNT};
pub use panel::PanelConfig;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Brightness divisor is zero or negative
    InvalidDivisor,
    /// A strip has fewer pixels than the configuration addresses
    StripTooShort { expected: usize, found: usize },
    /// GPIO number outside the chip's range
    InvalidPin(u8),
    /// Same GPIO assigned twice
    DuplicatePin(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDivisor => f.write_str("brightness divisor must be positive"),
            Self::StripTooShort { expected, found } => {
                write!(f, "strip has {} pixels, need {}", found, expected)
            }
            Self::InvalidPin(pin) => write!(f, "gpio{} does not exist", pin),
            Self::DuplicatePin(pin) => write!(f, "gpio{} assigned twice", pin),
        }
    }
}
