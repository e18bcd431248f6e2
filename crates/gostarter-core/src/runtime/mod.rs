//! Runtime detection
//!
//! Advisory only: generation never depends on an installed toolchain.

pub mod check;

pub use check::{check_go, check_toolchain, RuntimeInfo, ToolchainStatus};
