//! Line accumulator for the command channel
//!
//! Bytes arrive a few at a time; a line is complete at `\n`. Everything
//! before the newline, including a trailing `\r`, is kept verbatim; the
//! parser treats `\r` as whitespace.

use heapless::{String, Vec};

/// Longest line the panel accepts, excluding the newline
pub const MAX_LINE_LEN: usize = 128;

const NEWLINE: u8 = b'\n';

/// Errors for a completed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// More than the buffer capacity arrived before the newline
    Overflow,
    /// The line is not valid UTF-8
    InvalidUtf8,
}

impl core::fmt::Display for LineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Overflow => f.write_str("line too long"),
            Self::InvalidUtf8 => f.write_str("line is not valid UTF-8"),
        }
    }
}

/// Accumulates bytes until a newline
///
/// A line that outgrows the buffer is not truncated: the rest of it is
/// discarded and the newline reports [`LineError::Overflow`], so a partial
/// command never reaches the parser.
#[derive(Debug, Clone)]
pub struct LineBuffer<const N: usize = MAX_LINE_LEN> {
    buf: Vec<u8, N>,
    overflowed: bool,
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            overflowed: false,
        }
    }

    /// Feed one byte
    ///
    /// Returns `None` while the line is still open, or the completed line
    /// (without its newline) once `\n` arrives. The buffer is empty again
    /// after a completed line, whatever the outcome.
    pub fn push(&mut self, byte: u8) -> Option<Result<String<N>, LineError>> {
        if byte == NEWLINE {
            return Some(self.take());
        }

        if !self.overflowed && self.buf.push(byte).is_err() {
            self.overflowed = true;
        }
        None
    }

    /// Number of bytes buffered for the open line
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if no bytes are buffered
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Check if the open line has already outgrown the buffer
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Drop the open line
    pub fn clear(&mut self) {
        self.buf.clear();
        self.overflowed = false;
    }

    fn take(&mut self) -> Result<String<N>, LineError> {
        let bytes = core::mem::take(&mut self.buf);
        let overflowed = core::mem::replace(&mut self.overflowed, false);

        if overflowed {
            return Err(LineError::Overflow);
        }
        String::from_utf8(bytes).map_err(|_| LineError::InvalidUtf8)
    }
}
