//! Tests for CRC-32 computation

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::checksum::{crc32_reader, file_crc32, to_hex, ChecksumError, CHUNK_SIZE, CRC32_POLYNOMIAL};
use rstest::rstest;
use std::fs;
use std::io::{self, Read};
use tempfile::TempDir;

/// Bitwise reference implementation for the reflected polynomial
fn reference_crc32(data: &[u8]) -> u32 {
    let mut crc = !0u32;
    for &byte in data {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (CRC32_POLYNOMIAL & mask);
        }
    }
    !crc
}

#[rstest]
#[case::empty(b"", "00000000")]
#[case::hello(b"hello", "3610a686")]
#[case::check_value(b"123456789", "cbf43926")]
#[case::fox(b"The quick brown fox jumps over the lazy dog", "414fa339")]
fn test_known_checksums(#[case] input: &[u8], #[case] expected: &str) {
    let checksum = crc32_reader(input).expect("Read from slice failed");

    assert_eq!(to_hex(checksum), expected);
}

#[test]
fn test_polynomial_matches_reference_implementation() {
    let data: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();

    let checksum = crc32_reader(data.as_slice()).expect("Read from slice failed");

    assert_eq!(checksum, reference_crc32(&data));
}

#[rstest]
#[case(0, "00000000")]
#[case(0xff, "000000ff")]
#[case(0x3610_a686, "3610a686")]
#[case(u32::MAX, "ffffffff")]
fn test_to_hex_is_eight_lowercase_digits(#[case] value: u32, #[case] expected: &str) {
    let hex = to_hex(value);

    assert_eq!(hex, expected);
    assert_eq!(hex.len(), 8);
}

#[test]
fn test_streaming_across_chunk_boundaries() {
    let data: Vec<u8> = (0..CHUNK_SIZE * 3 + 17).map(|i| (i % 251) as u8).collect();

    let streamed = crc32_reader(data.as_slice()).expect("Read from slice failed");

    assert_eq!(streamed, crc32fast::hash(&data));
}

/// Reader that yields a few bytes and then fails
struct FailingReader {
    sent: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.sent {
            return Err(io::Error::other("device gone"));
        }
        self.sent = true;
        buf[..3].copy_from_slice(b"abc");
        Ok(3)
    }
}

#[test]
fn test_read_error_aborts_checksum() {
    let err = crc32_reader(FailingReader { sent: false }).unwrap_err();

    assert_eq!(err.to_string(), "device gone");
}

/// Reader that is interrupted once before delivering its data
struct InterruptedOnce {
    interrupted: bool,
    data: &'static [u8],
}

impl Read for InterruptedOnce {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.data.read(buf)
    }
}

#[test]
fn test_interrupted_reads_are_retried() {
    let reader = InterruptedOnce {
        interrupted: false,
        data: b"hello",
    };

    let checksum = crc32_reader(reader).expect("Interrupted read should be retried");

    assert_eq!(to_hex(checksum), "3610a686");
}

#[test]
fn test_file_crc32_known_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("a.txt");
    fs::write(&path, "hello").expect("Failed to write file");

    let hash = file_crc32(&path).expect("Failed to checksum file");

    assert_eq!(hash, "3610a686");
}

#[test]
fn test_file_crc32_empty_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("empty");
    fs::write(&path, b"").expect("Failed to write file");

    let hash = file_crc32(&path).expect("Failed to checksum file");

    assert_eq!(hash, "00000000");
}

#[test]
fn test_file_crc32_depends_only_on_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.bin");
    let second_dir = temp_dir.path().join("nested");
    fs::create_dir(&second_dir).expect("Failed to create dir");
    let second = second_dir.join("other-name.dat");
    fs::write(&first, b"same bytes").expect("Failed to write file");
    fs::write(&second, b"same bytes").expect("Failed to write file");

    assert_eq!(
        file_crc32(&first).expect("Failed to checksum file"),
        file_crc32(&second).expect("Failed to checksum file")
    );
}

#[test]
fn test_file_crc32_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("vanished.txt");

    let err = file_crc32(&path).unwrap_err();

    assert!(matches!(err, ChecksumError::Open { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().starts_with("failed to open"));
}

#[test]
fn test_file_crc32_directory_is_a_read_error_or_open_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    // Opening a directory succeeds on Unix and fails on read; Windows fails on open
    assert!(file_crc32(temp_dir.path()).is_err());
}
