//! GPIO pin abstractions
//!
//! Digital input and output lines. Electrical levels only: whether a low
//! level means "pressed" or "on" is decided by the code using the pin.

/// Digital output pin
pub trait OutputPin {
    /// Drive the line high (logic 1)
    fn set_high(&mut self);

    /// Drive the line low (logic 0)
    fn set_low(&mut self);

    /// Drive the line to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the line is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the line is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Buttons are wired active-low against an internal pull-up, so chip HALs
/// must hand out inputs with the pull-up already enabled.
pub trait InputPin {
    /// Sample the line; true if it reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Sample the line; true if it reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
