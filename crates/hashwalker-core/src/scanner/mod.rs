//! Scanner module: Directory traversal
//!
//! Responsible for validating the root directory and visiting every
//! entry below it exactly once, in a stable depth-first order.

mod entry;
mod walker;

pub use entry::{EntryKind, VisitedEntry};
pub use walker::{WalkError, WalkStats, Walker};
