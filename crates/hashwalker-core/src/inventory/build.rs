//! Inventory builder: the walk-and-checksum pipeline

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::FileRecord;
use crate::checksum::file_crc32;
use crate::scanner::{VisitedEntry, WalkError, Walker};

/// Records collected by one walk, in traversal order
///
/// Append-only while the walk runs; handed out by value afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<FileRecord>,
    skipped: usize,
}

impl Inventory {
    fn push(&mut self, record: FileRecord) {
        self.records.push(record);
    }

    fn skip(&mut self) {
        self.skipped += 1;
    }

    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Number of entries that could not be read and produced no record
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<FileRecord> {
        self.records
    }
}

/// Builds an [`Inventory`] for a directory tree
#[derive(Debug, Clone)]
pub struct InventoryBuilder {
    walker: Walker,
    trim_prefix: String,
}

impl InventoryBuilder {
    /// Create a new builder for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            walker: Walker::new(root),
            trim_prefix: String::new(),
        }
    }

    /// Strip this prefix from every record path
    #[must_use]
    pub fn with_trim_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.trim_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.walker.root()
    }

    #[must_use]
    pub fn trim_prefix(&self) -> &str {
        &self.trim_prefix
    }

    /// Walk the tree and checksum every regular file
    ///
    /// Files that fail to open or read are logged and skipped.
    ///
    /// # Errors
    /// Returns an error only if the root itself is missing, not a
    /// directory, or unreadable.
    pub fn build(&self) -> Result<Inventory, WalkError> {
        let mut inventory = Inventory::default();

        let stats = self
            .walker
            .walk(|entry| self.process_entry(entry, &mut inventory))?;

        inventory.skipped += stats.errors;

        debug!(
            "Inventory complete: {} records, {} skipped, {} entries visited",
            inventory.len(),
            inventory.skipped(),
            stats.visited
        );
        Ok(inventory)
    }

    fn process_entry(&self, entry: &VisitedEntry, inventory: &mut Inventory) {
        if !entry.is_file() {
            return;
        }

        match file_crc32(&entry.path) {
            Ok(crc32) => inventory.push(FileRecord::from_entry(entry, crc32, &self.trim_prefix)),
            Err(e) => {
                warn!("{}", e);
                inventory.skip();
            }
        }
    }
}
