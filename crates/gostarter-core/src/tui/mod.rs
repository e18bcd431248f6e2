//! CLI output using cliclack (Charm-style inline logs, spinners, notes)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod create;

#[cfg(feature = "tui")]
pub use create::{run, CreateArgs};
