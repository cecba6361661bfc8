//! Lumipad Serial Command Protocol
//!
//! The panel and its host talk over one UART using newline-terminated ASCII
//! lines. There is no framing, versioning or acknowledgement.
//!
//! # Host → panel
//!
//! ```text
//! <name> [arg]... \n
//!
//! set 3 3 10 20 30
//! clear_status
//! set_buzzer 1
//! ```
//!
//! The name is one or more `[A-Za-z0-9_]` characters. Arguments are any runs
//! of non-whitespace characters; the command registry decides which of them
//! must be integers.
//!
//! # Panel → host
//!
//! ```text
//! pressed <index>\r\n
//! released <index>\r\n
//! ```
//!
//! Pushed on every button transition, never as a reply to a command.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod args;
pub mod command;
pub mod line;
pub mod notification;

pub use args::{check_args, is_integer, parse_integer, ArgError, ArgKind, Args};
pub use command::{is_command_char, parse_line, Command, NotACommand, MAX_ARGS};
pub use line::{LineBuffer, LineError, MAX_LINE_LEN};
pub use notification::{Notification, MAX_NOTIFICATION_LEN};
