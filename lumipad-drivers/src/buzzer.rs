//! GPIO buzzer output
//!
//! An active buzzer on a plain output pin, driven directly or through a
//! transistor.

use lumipad_core::traits::Buzzer;
use lumipad_hal::OutputPin;

/// GPIO buzzer
///
/// The pin can be active-high (default) or active-low.
pub struct GpioBuzzer<P> {
    pin: P,
    /// If true, buzzer ON = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> GpioBuzzer<P> {
    /// Create a buzzer and drive it silent
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut buzzer = Self {
            pin,
            inverted,
            on: false,
        };
        buzzer.set_on(false);
        buzzer
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Buzzer for GpioBuzzer<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(on != self.inverted);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
