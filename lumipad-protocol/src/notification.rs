//! Outbound button notifications

use core::fmt::{self, Write};

use heapless::String;

/// Longest encoded notification, `released 4294967295\r\n`
pub const MAX_NOTIFICATION_LEN: usize = 24;

/// A button transition report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    Pressed(usize),
    Released(usize),
}

impl Notification {
    /// Notification for button `index` entering state `pressed`
    pub fn from_transition(index: usize, pressed: bool) -> Self {
        if pressed {
            Self::Pressed(index)
        } else {
            Self::Released(index)
        }
    }

    /// The button index
    pub fn index(&self) -> usize {
        match *self {
            Self::Pressed(index) | Self::Released(index) => index,
        }
    }

    /// Encode as a wire line, `\r\n` terminated
    pub fn encode(&self) -> String<MAX_NOTIFICATION_LEN> {
        let mut line = String::new();
        // Fits for any 32-bit index
        let _ = write!(line, "{}\r\n", self);
        line
    }
}

/// The line without its terminator
impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressed(index) => write!(f, "pressed {}", index),
            Self::Released(index) => write!(f, "released {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transition() {
        assert_eq!(Notification::from_transition(2, true), Notification::Pressed(2));
        assert_eq!(Notification::from_transition(2, false), Notification::Released(2));
        assert_eq!(Notification::Released(7).index(), 7);
    }

    #[test]
    fn test_encode_pressed() {
        assert_eq!(Notification::Pressed(0).encode().as_str(), "pressed 0\r\n");
    }

    #[test]
    fn test_encode_released() {
        assert_eq!(Notification::Released(8).encode().as_str(), "released 8\r\n");
    }

    #[test]
    fn test_encode_widest_index_fits() {
        let line = Notification::Released(u32::MAX as usize).encode();
        assert_eq!(line.as_str(), "released 4294967295\r\n");
    }
}
