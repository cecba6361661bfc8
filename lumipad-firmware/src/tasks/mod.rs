//! Embassy async tasks
//!
//! The panel runs as a single cooperative task.

pub mod panel;

pub use panel::panel_task;
