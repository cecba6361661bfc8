//! LED supply switch
//!
//! Both strips hang off one switched supply. It must be enabled before the
//! first frame is shown.

use lumipad_hal::OutputPin;

/// Active-high enable for the LED supply
pub struct LedPower<P> {
    pin: P,
}

impl<P: OutputPin> LedPower<P> {
    /// Take the enable pin, leaving the supply off
    pub fn new(mut pin: P) -> Self {
        pin.set_low();
        Self { pin }
    }

    /// Take the enable pin and switch the supply on
    pub fn new_enabled(pin: P) -> Self {
        let mut power = Self::new(pin);
        power.enable();
        power
    }

    pub fn enable(&mut self) {
        self.pin.set_high();
    }

    pub fn disable(&mut self) {
        self.pin.set_low();
    }

    pub fn is_enabled(&self) -> bool {
        self.pin.is_set_high()
    }
}
