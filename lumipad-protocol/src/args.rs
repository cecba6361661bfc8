//! Argument kinds and validation
//!
//! A command signature is a slice of [`ArgKind`]. [`check_args`] gates an
//! effect on the argument count and on every `Integer` position holding a
//! decimal literal, and returns an [`Args`] view whose integer accessors
//! cannot fail on a position the signature declared.

use core::fmt;

use crate::command::Command;

/// Expected type of one argument position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgKind {
    /// Passed through as the raw token
    Text,
    /// Optional `-` followed by decimal digits, fitting in an `i32`
    Integer,
}

/// Argument validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgError {
    /// Wrong number of arguments
    Count { expected: usize, found: usize },
    /// Position `index` should be an integer and is not
    NotAnInteger { index: usize },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count { expected, found } => {
                write!(f, "expected {} arguments, found {}", expected, found)
            }
            Self::NotAnInteger { index } => write!(f, "argument {} is not an integer", index),
        }
    }
}

/// Check whether a token is an integer literal
///
/// Accepts an optional leading `-` and at least one ASCII digit, with a value
/// that fits in an `i32`. A bare `-`, an empty token and a `+` sign are all
/// rejected.
pub fn is_integer(token: &str) -> bool {
    parse_integer(token).is_some()
}

/// Parse an integer literal, see [`is_integer`]
pub fn parse_integer(token: &str) -> Option<i32> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Validate a command's arguments against a signature
pub fn check_args<'c, 'a>(
    command: &'c Command<'a>,
    signature: &[ArgKind],
) -> Result<Args<'c, 'a>, ArgError> {
    let args = command.args();
    if args.len() != signature.len() {
        return Err(ArgError::Count {
            expected: signature.len(),
            found: args.len(),
        });
    }

    for (index, (token, kind)) in args.iter().zip(signature).enumerate() {
        if *kind == ArgKind::Integer && !is_integer(token) {
            return Err(ArgError::NotAnInteger { index });
        }
    }

    Ok(Args { args })
}

/// Arguments that passed [`check_args`]
#[derive(Debug, Clone, Copy)]
pub struct Args<'c, 'a> {
    args: &'c [&'a str],
}

impl<'a> Args<'_, 'a> {
    /// Number of arguments
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if there are no arguments
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Integer argument at `index`
    ///
    /// Only fails if `index` was not declared `Integer` in the signature.
    pub fn int(&self, index: usize) -> Result<i32, ArgError> {
        self.args
            .get(index)
            .and_then(|token| parse_integer(token))
            .ok_or(ArgError::NotAnInteger { index })
    }

    /// Raw argument at `index`
    pub fn text(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse_line;
    use ArgKind::{Integer, Text};

    #[test]
    fn test_integer_literals() {
        assert!(is_integer("0"));
        assert!(is_integer("42"));
        assert!(is_integer("-7"));
        assert!(is_integer("007"));
        assert!(is_integer("2147483647"));
        assert!(is_integer("-2147483648"));
    }

    #[test]
    fn test_non_integer_literals() {
        assert!(!is_integer(""));
        assert!(!is_integer("-"));
        assert!(!is_integer("+5"));
        assert!(!is_integer("--5"));
        assert!(!is_integer("5-"));
        assert!(!is_integer("1.5"));
        assert!(!is_integer("0x10"));
        assert!(!is_integer("abc"));
        assert!(!is_integer("2147483648"));
    }

    #[test]
    fn test_parse_integer_values() {
        assert_eq!(parse_integer("-12"), Some(-12));
        assert_eq!(parse_integer("300"), Some(300));
        assert_eq!(parse_integer("-"), None);
    }

    #[test]
    fn test_check_args_accepts_matching_signature() {
        let cmd = parse_line("set 3 3 10 20 30").unwrap();
        let args = check_args(&cmd, &[Integer; 5]).unwrap();
        assert_eq!(args.len(), 5);
        assert_eq!(args.int(0), Ok(3));
        assert_eq!(args.int(4), Ok(30));
    }

    #[test]
    fn test_check_args_count_mismatch() {
        let cmd = parse_line("set 1 2 3").unwrap();
        assert_eq!(
            check_args(&cmd, &[Integer; 5]).unwrap_err(),
            ArgError::Count {
                expected: 5,
                found: 3
            }
        );

        let cmd = parse_line("clear now").unwrap();
        assert_eq!(
            check_args(&cmd, &[]).unwrap_err(),
            ArgError::Count {
                expected: 0,
                found: 1
            }
        );
    }

    #[test]
    fn test_check_args_reports_first_bad_integer() {
        let cmd = parse_line("set 1 x 3 - 5").unwrap();
        assert_eq!(
            check_args(&cmd, &[Integer; 5]).unwrap_err(),
            ArgError::NotAnInteger { index: 1 }
        );
    }

    #[test]
    fn test_text_positions_take_anything() {
        let cmd = parse_line("say hello 5").unwrap();
        let args = check_args(&cmd, &[Text, Integer]).unwrap();
        assert_eq!(args.text(0), Some("hello"));
        assert_eq!(args.int(1), Ok(5));
        assert_eq!(args.int(0), Err(ArgError::NotAnInteger { index: 0 }));
    }

    #[test]
    fn test_empty_signature() {
        let cmd = parse_line("show").unwrap();
        let args = check_args(&cmd, &[]).unwrap();
        assert!(args.is_empty());
    }
}
