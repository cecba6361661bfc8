//! Pin allocation by GPIO number
//!
//! Board wiring comes from `BoardConfig` as plain numbers; the bank turns
//! them back into pins, and refuses to hand the same pin out twice.

use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;

/// GPIOs on the RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken, or kept out of the bank for fixed wiring
    AlreadyTaken(u8),
}

/// All GPIOs not claimed elsewhere, indexed by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Create a bank from per-number slots
    ///
    /// `None` slots are pins the caller kept back, usually because a
    /// peripheral needs them with their concrete type.
    pub fn new(pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT]) -> Self {
        Self { pins }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin(pin_num))?
            .take()
            .ok_or(PinError::AlreadyTaken(pin_num))
    }

    /// Check if a pin is still in the bank
    pub fn is_available(&self, pin_num: u8) -> bool {
        self.pins
            .get(pin_num as usize)
            .is_some_and(|slot| slot.is_some())
    }
}
