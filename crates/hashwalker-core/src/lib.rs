//! hashwalker-core: Core library for CRC-32 directory inventories
//!
//! Walks a directory tree, checksums every regular file with CRC-32
//! (IEEE, reflected polynomial `0xEDB88320`) and serializes the resulting
//! records as a JSON manifest.
//!
//! The pipeline is strictly sequential:
//!
//! 1. [`scanner`] visits every entry below the root
//! 2. [`checksum`] streams each regular file through a CRC-32 accumulator
//! 3. [`inventory`] collects one [`FileRecord`] per file it could read
//! 4. [`report`] renders the collected records as indented JSON

pub mod checksum;
pub mod inventory;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use checksum::{file_crc32, ChecksumError};
pub use inventory::{FileRecord, Inventory, InventoryBuilder};
pub use report::{render, write_report, ReportError};
pub use scanner::{EntryKind, VisitedEntry, WalkError, WalkStats, Walker};
