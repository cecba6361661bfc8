//! Command dispatcher
//!
//! Owns the matrix, the status strip and the optional buzzer. Each
//! registered command is a method; [`Dispatcher::dispatch`] looks a parsed
//! command up, validates its arguments and calls the method.

use lumipad_protocol::{check_args, ArgError, Command};

use super::registry::{self, CommandEntry, CommandId};
use crate::config::{ConfigError, PanelConfig};
use crate::traits::{Buzzer, LedStrip, Rgb};

/// Reasons a command had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    /// No such command on this board
    UnknownCommand,
    /// Wrong argument count, or a non-integer where an integer belongs
    InvalidArguments(ArgError),
    /// Coordinates or index outside the strip
    OutOfRange(CommandId),
}

impl From<ArgError> for DispatchError {
    fn from(err: ArgError) -> Self {
        Self::InvalidArguments(err)
    }
}

impl core::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownCommand => f.write_str("unknown command"),
            Self::InvalidArguments(err) => write!(f, "invalid arguments: {}", err),
            Self::OutOfRange(CommandId::Set) => f.write_str("invalid coordinates"),
            Self::OutOfRange(_) => f.write_str("invalid index"),
        }
    }
}

/// Routes commands to the LED strips and buzzer
pub struct Dispatcher<M, S, B> {
    config: PanelConfig,
    matrix: M,
    status: S,
    buzzer: Option<B>,
}

impl<M: LedStrip, S: LedStrip, B: Buzzer> Dispatcher<M, S, B> {
    /// Take ownership of the devices
    ///
    /// Fails if the divisor is not positive or a strip is shorter than the
    /// configuration addresses.
    pub fn new(
        config: PanelConfig,
        matrix: M,
        status: S,
        buzzer: Option<B>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        check_len(config.matrix_len(), matrix.len())?;
        check_len(config.status_len, status.len())?;

        Ok(Self {
            config,
            matrix,
            status,
            buzzer,
        })
    }

    /// Find a command this dispatcher can run
    ///
    /// `set_buzzer` is only found when a buzzer is fitted.
    pub fn lookup(&self, name: &str) -> Option<&'static CommandEntry> {
        registry::lookup(name).filter(|entry| !entry.requires_buzzer || self.buzzer.is_some())
    }

    /// Validate and run a parsed command
    ///
    /// Nothing is touched unless the name is registered and the arguments
    /// match its signature.
    pub fn dispatch(&mut self, command: &Command<'_>) -> Result<CommandId, DispatchError> {
        let entry = self
            .lookup(command.name())
            .ok_or(DispatchError::UnknownCommand)?;
        let args = check_args(command, entry.signature)?;

        match entry.id {
            CommandId::Set => self.set(
                args.int(0)?,
                args.int(1)?,
                args.int(2)?,
                args.int(3)?,
                args.int(4)?,
            )?,
            CommandId::Clear => self.clear(),
            CommandId::Show => self.show(),
            CommandId::SetStatus => {
                self.set_status(args.int(0)?, args.int(1)?, args.int(2)?, args.int(3)?)?
            }
            CommandId::ClearStatus => self.clear_status(),
            CommandId::ShowStatus => self.show_status(),
            CommandId::SetBuzzer => self.set_buzzer(args.int(0)?)?,
        }

        Ok(entry.id)
    }

    /// Set one matrix pixel without showing it
    pub fn set(&mut self, x: i32, y: i32, r: i32, g: i32, b: i32) -> Result<(), DispatchError> {
        let index = self
            .config
            .matrix_index(x, y)
            .ok_or(DispatchError::OutOfRange(CommandId::Set))?;
        let color = self.scale(r, g, b);

        self.matrix.wait();
        self.matrix.set(index, color);
        Ok(())
    }

    /// Blank the matrix and show it
    pub fn clear(&mut self) {
        self.matrix.wait();
        self.matrix.fill(Rgb::BLACK);
        self.matrix.show();
    }

    /// Show the matrix as it is
    pub fn show(&mut self) {
        self.matrix.wait();
        self.matrix.show();
    }

    /// Set one status pixel without showing it
    pub fn set_status(&mut self, index: i32, r: i32, g: i32, b: i32) -> Result<(), DispatchError> {
        let index = self
            .config
            .status_index(index)
            .ok_or(DispatchError::OutOfRange(CommandId::SetStatus))?;
        let color = self.scale(r, g, b);

        self.status.wait();
        self.status.set(index, color);
        Ok(())
    }

    /// Blank the status strip and show it
    pub fn clear_status(&mut self) {
        self.status.wait();
        self.status.fill(Rgb::BLACK);
        self.status.show();
    }

    /// Show the status strip as it is
    pub fn show_status(&mut self) {
        self.status.wait();
        self.status.show();
    }

    /// Any non-zero value turns the buzzer on
    pub fn set_buzzer(&mut self, value: i32) -> Result<(), DispatchError> {
        let buzzer = self
            .buzzer
            .as_mut()
            .ok_or(DispatchError::UnknownCommand)?;
        buzzer.set_on(value != 0);
        Ok(())
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    pub fn matrix_mut(&mut self) -> &mut M {
        &mut self.matrix
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut S {
        &mut self.status
    }

    pub fn buzzer(&self) -> Option<&B> {
        self.buzzer.as_ref()
    }

    fn scale(&self, r: i32, g: i32, b: i32) -> Rgb {
        Rgb::scaled(r, g, b, self.config.brightness_divisor)
    }
}

fn check_len(expected: usize, found: usize) -> Result<(), ConfigError> {
    if found < expected {
        return Err(ConfigError::StripTooShort { expected, found });
    }
    Ok(())
}
