//! JSON report writer

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use crate::inventory::FileRecord;

/// Indentation used for each nesting level of the report
pub const REPORT_INDENT: &[u8] = b"   ";

/// Errors that can occur while producing the report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
}

/// Render records as an indented JSON array
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render(records: &[FileRecord]) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(REPORT_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render records and write them, newline-terminated, to `writer`
///
/// Nothing is written unless rendering succeeds.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_report(mut writer: impl Write, records: &[FileRecord]) -> Result<(), ReportError> {
    let rendered = render(records)?;
    writer.write_all(rendered.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
