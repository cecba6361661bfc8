//! Buzzer trait

/// A single on/off sound output
pub trait Buzzer {
    /// Turn the buzzer on or off
    fn set_on(&mut self, on: bool);

    /// Check if the buzzer is currently on
    fn is_on(&self) -> bool;
}

/// Stands in for the buzzer type on boards without one
///
/// Uninhabited, so `Option<NoBuzzer>` is always `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoBuzzer {}

impl Buzzer for NoBuzzer {
    fn set_on(&mut self, _on: bool) {
        match *self {}
    }

    fn is_on(&self) -> bool {
        match *self {}
    }
}
