//! Checksum module: CRC-32 over file contents
//!
//! Files are streamed in fixed-size chunks, so memory use does not depend
//! on file size. The polynomial is fixed to the reflected IEEE polynomial.

mod crc32;

pub use crc32::{crc32_reader, file_crc32, to_hex, ChecksumError, CHUNK_SIZE, CRC32_POLYNOMIAL};

#[cfg(test)]
mod tests;
