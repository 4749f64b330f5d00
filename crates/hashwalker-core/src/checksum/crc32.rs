//! Streaming CRC-32

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crc32fast::Hasher;
use thiserror::Error;

/// Reflected form of the IEEE 802.3 polynomial, as used by `crc32fast`
pub const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Bytes read from the file per iteration
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Errors that can occur while checksumming a file
#[derive(Debug, Error)]
pub enum ChecksumError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ChecksumError {
    /// Path of the file that failed
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }
}

/// Compute the CRC-32 of everything `reader` yields
///
/// # Errors
/// Returns the first read error other than [`io::ErrorKind::Interrupted`].
pub fn crc32_reader(mut reader: impl Read) -> io::Result<u32> {
    let mut hasher = Hasher::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(hasher.finalize())
}

/// Render a checksum as exactly 8 lowercase hex digits, most significant byte first
#[must_use]
pub fn to_hex(checksum: u32) -> String {
    format!("{checksum:08x}")
}

/// Open `path` and return the hex CRC-32 of its contents
///
/// The file handle lives only for the duration of this call and is closed
/// on every return path.
///
/// # Errors
/// Returns an error if the file cannot be opened or a read fails part way.
pub fn file_crc32(path: impl AsRef<Path>) -> Result<String, ChecksumError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ChecksumError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let checksum = crc32_reader(file).map_err(|source| ChecksumError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(to_hex(checksum))
}
