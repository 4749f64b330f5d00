//! Entry types handed to the traversal callback

use std::fs::{FileType, Metadata};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Kind of filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    /// Sockets, FIFOs, device nodes
    Other,
}

impl EntryKind {
    /// Classify a file type without following symlinks
    #[must_use]
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Directory => "directory",
            Self::File => "file",
            Self::Symlink => "symlink",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// An entry visited during traversal
#[derive(Debug, Clone)]
pub struct VisitedEntry {
    /// Path as produced by the walk: the root joined with relative components
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Size in bytes, when metadata could be read
    pub size: Option<u64>,
    /// Last modification time, when the platform reports one
    pub modified: Option<SystemTime>,
}

impl VisitedEntry {
    /// Build an entry from its path, kind, and (possibly missing) metadata
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind, metadata: Option<&Metadata>) -> Self {
        Self {
            path: path.into(),
            kind,
            size: metadata.map(Metadata::len),
            modified: metadata.and_then(|m| m.modified().ok()),
        }
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// True for regular files only; symlinks and special files are excluded
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
