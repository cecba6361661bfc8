//! Command registry and dispatch
//!
//! The registry maps names to argument signatures; the [`Dispatcher`] owns
//! the devices and runs one method per command.

pub mod dispatcher;
pub mod registry;

pub use dispatcher::{DispatchError, Dispatcher};
pub use registry::{available, lookup, CommandEntry, CommandId, REGISTRY};
