//! Inventory module: Records gathered by one walk
//!
//! Ties the scanner and checksum modules together. A single
//! [`InventoryBuilder::build`] call walks the tree and returns an owned
//! [`Inventory`] holding one [`FileRecord`] per file that was fully read.

mod build;
mod record;

pub use build::{Inventory, InventoryBuilder};
pub use record::{trim_path, FileRecord};
