//! Report module: JSON rendering of collected records

mod json;

pub use json::{render, write_report, ReportError, REPORT_INDENT};
