//! Command line tokenizer
//!
//! Splits one line into a command name and raw argument tokens. No type
//! interpretation happens here; see [`crate::args`] for that.

use core::fmt;

use heapless::Vec;

/// Maximum number of arguments on one line
///
/// Well above the widest registered command (`set`, five arguments).
pub const MAX_ARGS: usize = 8;

/// Reasons a line does not yield a command
///
/// None of these are faults: the line is dropped and the panel keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NotACommand {
    /// The line is empty or whitespace only
    Empty,
    /// The first token has a character outside `[A-Za-z0-9_]`
    InvalidName,
    /// More than [`MAX_ARGS`] arguments
    TooManyArguments,
}

impl fmt::Display for NotACommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty line"),
            Self::InvalidName => f.write_str("invalid command name"),
            Self::TooManyArguments => f.write_str("too many arguments"),
        }
    }
}

/// A parsed command line, borrowing from the line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    name: &'a str,
    args: Vec<&'a str, MAX_ARGS>,
}

impl<'a> Command<'a> {
    /// Build a command from a name and raw argument tokens
    pub fn new(name: &'a str, args: &[&'a str]) -> Result<Self, NotACommand> {
        if name.is_empty() {
            return Err(NotACommand::Empty);
        }
        if !name.chars().all(is_command_char) {
            return Err(NotACommand::InvalidName);
        }

        let args = Vec::from_slice(args).map_err(|_| NotACommand::TooManyArguments)?;
        Ok(Self { name, args })
    }

    /// The command name
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// All arguments in the order they appeared
    pub fn args(&self) -> &[&'a str] {
        &self.args
    }

    /// Get argument by index (0-based)
    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.args.get(idx).copied()
    }
}

/// `name arg0 arg1 ...`, single-space separated
impl fmt::Display for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.name);
        for arg in &self.args {
            defmt::write!(f, " {=str}", arg);
        }
    }
}

/// Characters allowed in a command name
pub fn is_command_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// ASCII whitespace as the C locale defines it, vertical tab included
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Parse a line into a command
///
/// Tokens are separated by runs of ASCII whitespace; leading and trailing
/// whitespace is ignored. There is no quoting or escaping.
pub fn parse_line(line: &str) -> Result<Command<'_>, NotACommand> {
    let mut tokens = line.split(is_separator).filter(|t| !t.is_empty());

    let name = tokens.next().ok_or(NotACommand::Empty)?;
    if !name.chars().all(is_command_char) {
        return Err(NotACommand::InvalidName);
    }

    let mut args = Vec::new();
    for token in tokens {
        args.push(token).map_err(|_| NotACommand::TooManyArguments)?;
    }

    Ok(Command { name, args })
}
