//! Inventory record types

use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scanner::VisitedEntry;

/// One checksummed file
///
/// Field order is the key order of the emitted JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path as produced by the walk, after prefix trimming
    pub path: String,
    /// CRC-32 as 8 lowercase hex digits
    pub crc32: String,
    /// Size in bytes
    pub size: u64,
    /// Last modification time
    pub mod_time: DateTime<Utc>,
}

impl FileRecord {
    /// Create a new record
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        crc32: impl Into<String>,
        size: u64,
        mod_time: DateTime<Utc>,
    ) -> Self {
        Self {
            path: path.into(),
            crc32: crc32.into(),
            size,
            mod_time,
        }
    }

    /// Build a record from a visited entry and its checksum
    ///
    /// Missing metadata falls back to size 0 and the Unix epoch.
    #[must_use]
    pub fn from_entry(entry: &VisitedEntry, crc32: impl Into<String>, trim_prefix: &str) -> Self {
        let path = entry.path.to_string_lossy();
        let mod_time = entry.modified.unwrap_or(SystemTime::UNIX_EPOCH);

        Self::new(
            trim_path(&path, trim_prefix),
            crc32,
            entry.size.unwrap_or(0),
            DateTime::<Utc>::from(mod_time),
        )
    }
}

/// Strip `prefix` from the start of `path`
///
/// Paths that do not start with the prefix, and an empty prefix, leave the
/// path unchanged. The match is on the string, not on path components.
#[must_use]
pub fn trim_path(path: &str, prefix: &str) -> String {
    path.strip_prefix(prefix).unwrap_or(path).to_string()
}
