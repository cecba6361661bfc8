//! Board wiring per hardware revision

use super::ConfigError;

/// GPIOs on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Buttons on every supported board
///
/// Ordered top to bottom, left to right: top left, top right, bottom left,
/// bottom right, arrow up, arrow left, center, arrow right, arrow down.
pub const BUTTON_COUNT: usize = 9;

/// Supported logic board revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Revision {
    Logic1_1,
    Logic1_2,
}

impl core::fmt::Display for Revision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Logic1_1 => f.write_str("logic 1.1"),
            Self::Logic1_2 => f.write_str("logic 1.2"),
        }
    }
}

/// GPIO assignment for one board revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub revision: Revision,
    /// Button inputs in index order
    pub buttons: [u8; BUTTON_COUNT],
    /// Enables the LED supply, active high
    pub led_power: u8,
    /// Buzzer output, if fitted
    pub buzzer: Option<u8>,
    /// WS2812 data line for the matrix
    pub matrix_data: u8,
    /// WS2812 data line for the status strip
    pub status_data: u8,
    /// Command UART transmit
    pub uart_tx: u8,
    /// Command UART receive
    pub uart_rx: u8,
}

impl BoardConfig {
    pub const LOGIC_1_1: Self = Self {
        revision: Revision::Logic1_1,
        buttons: [6, 7, 8, 9, 10, 11, 12, 13, 14],
        led_power: 15,
        buzzer: Some(22),
        matrix_data: 2,
        status_data: 3,
        uart_tx: 0,
        uart_rx: 1,
    };

    /// 1.2 moved the LED power switch onto the old arrow-down line and
    /// rerouted the center and arrow-down buttons
    pub const LOGIC_1_2: Self = Self {
        revision: Revision::Logic1_2,
        buttons: [6, 7, 8, 9, 10, 11, 19, 13, 20],
        led_power: 14,
        ..Self::LOGIC_1_1
    };

    /// Wiring for a revision
    pub const fn for_revision(revision: Revision) -> Self {
        match revision {
            Revision::Logic1_1 => Self::LOGIC_1_1,
            Revision::Logic1_2 => Self::LOGIC_1_2,
        }
    }

    /// Every GPIO the board uses
    pub fn pins(&self) -> impl Iterator<Item = u8> + '_ {
        self.buttons
            .iter()
            .copied()
            .chain([
                self.led_power,
                self.matrix_data,
                self.status_data,
                self.uart_tx,
                self.uart_rx,
            ])
            .chain(self.buzzer)
    }

    /// Check every pin exists and none is used twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut used: u32 = 0;
        for pin in self.pins() {
            if pin >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin(pin));
            }
            let bit = 1 << pin;
            if used & bit != 0 {
                return Err(ConfigError::DuplicatePin(pin));
            }
            used |= bit;
        }
        Ok(())
    }
}
