//! File walker: Visits every entry in a directory tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::{EntryKind, VisitedEntry};

/// Errors that abort a walk before or at the root
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("root path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("root path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read root directory {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counters gathered during one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Entries handed to the callback, the root included
    pub visited: usize,
    /// Entries below the root that could not be read and were skipped
    pub errors: usize,
}

/// Sequential, depth-first directory walker
///
/// Entries within a directory are visited in file name order, so two walks
/// over an unchanged tree produce the same sequence. Symlinks are reported
/// but never followed, except when the root itself is one.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory being walked
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check that the root exists, is a directory, and can be listed
    ///
    /// # Errors
    /// Returns [`WalkError::RootNotFound`], [`WalkError::NotADirectory`] or
    /// [`WalkError::RootUnreadable`] accordingly.
    pub fn validate_root(&self) -> Result<(), WalkError> {
        let metadata = match fs::metadata(&self.root) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(WalkError::RootNotFound(self.root.clone()));
            }
            Err(source) => return Err(self.unreadable(source)),
        };

        if !metadata.is_dir() {
            return Err(WalkError::NotADirectory(self.root.clone()));
        }

        fs::read_dir(&self.root).map_err(|source| self.unreadable(source))?;
        Ok(())
    }

    /// Walk the tree, calling `visit` once for every readable entry
    ///
    /// Failures below the root are logged, counted in
    /// [`WalkStats::errors`], and skipped.
    ///
    /// # Errors
    /// Returns an error if the root fails validation or cannot be read.
    pub fn walk<F>(&self, mut visit: F) -> Result<WalkStats, WalkError>
    where
        F: FnMut(&VisitedEntry),
    {
        self.validate_root()?;
        debug!("Walking {}", self.root.display());

        let mut stats = WalkStats::default();
        let entries = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name();

        for result in entries {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(self.unreadable(e.into())),
                Err(e) => {
                    log_entry_error(e.path(), &e);
                    stats.errors += 1;
                    continue;
                }
            };

            match visited_entry(&entry) {
                Ok(visited) => {
                    stats.visited += 1;
                    visit(&visited);
                }
                Err(e) if entry.depth() == 0 => return Err(self.unreadable(e.into())),
                Err(e) => {
                    log_entry_error(Some(entry.path()), &e);
                    stats.errors += 1;
                }
            }
        }

        Ok(stats)
    }

    fn unreadable(&self, source: io::Error) -> WalkError {
        WalkError::RootUnreadable {
            path: self.root.clone(),
            source,
        }
    }
}

fn visited_entry(entry: &DirEntry) -> Result<VisitedEntry, walkdir::Error> {
    let metadata = entry.metadata()?;
    let kind = EntryKind::from_file_type(entry.file_type());
    Ok(VisitedEntry::new(entry.path(), kind, Some(&metadata)))
}

fn log_entry_error(path: Option<&Path>, err: &walkdir::Error) {
    // walkdir's Display already names the path; prefer the bare io cause
    let cause = err
        .io_error()
        .map_or_else(|| err.to_string(), ToString::to_string);
    match path {
        Some(p) => warn!("Skipping {}: {}", p.display(), cause),
        None => warn!("Skipping entry: {}", cause),
    }
}
