//! hashwalker-cli library
//!
//! This module exposes the internal functionality of hashwalker-cli for testing purposes.

// Make commands module available for internal tests only
#[doc(hidden)]
pub mod commands;

pub mod logging;
pub mod signal;
pub mod types;
pub use types::Cli;
