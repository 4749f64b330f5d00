//! CLI commands

pub mod walk;
