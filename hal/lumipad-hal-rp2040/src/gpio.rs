//! GPIO adapters
//!
//! Wrap embassy-rp pins in the `lumipad-hal` traits.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;
use lumipad_hal::{InputPin, OutputPin};

/// Digital input
pub struct RpInput<'d> {
    input: Input<'d>,
}

impl<'d> RpInput<'d> {
    /// Input with the internal pull-up, as the buttons need
    pub fn pull_up(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
        }
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}

/// Push-pull output
pub struct RpOutput<'d> {
    output: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Output driven to `high` from the moment it is configured
    pub fn new(pin: Peri<'d, AnyPin>, high: bool) -> Self {
        Self {
            output: Output::new(pin, Level::from(high)),
        }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
