//! crates/dash_io/src/lib.rs
//! Report loading for the audit dashboard.
//!
//! - One fetch of a fixed relative path from a `ReportSource` (directory or HTTP).
//! - Non-success status, unreadable source, bad JSON, or schema mismatch are
//!   all `LoadError`s. There is no retry: the caller treats failure as terminal.
//! - The typed `Report` is returned with the SHA-256 digest of the fetched bytes.
//! - `validate` reports shape findings without rejecting the report.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod hasher;
pub mod loader;
pub mod schema;
pub mod source;
pub mod validate;

pub use loader::{decode_report, LoadedReport, ReportLoader, DEFAULT_REPORT_PATH};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{DirSource, Fetched, ReportSource};
pub use validate::{validate_report, Finding};

/// Everything that can go wrong before the report is in memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be reached or read (connection refused, I/O failure).
    #[error("report unreachable at {path}: {msg}")]
    Unreachable { path: String, msg: String },

    /// The source answered with a non-success status.
    #[error("report request for {path} returned status {status}")]
    Status { path: String, status: u16 },

    /// The body is not JSON, or not the expected structure.
    #[error("report could not be parsed: {0}")]
    Parse(String),

    /// The body is JSON but violates the report schema.
    #[error("report schema error at {pointer}: {msg}")]
    Schema { pointer: String, msg: String },

    /// The source itself is misconfigured (bad base URL, absolute report path).
    #[error("invalid report source: {0}")]
    Source(String),
}

pub type LoadResult<T> = Result<T, LoadError>;

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}

pub mod prelude {
    pub use crate::{
        decode_report, validate_report, DirSource, Fetched, Finding, LoadError, LoadResult,
        LoadedReport, ReportLoader, ReportSource, DEFAULT_REPORT_PATH,
    };
    #[cfg(feature = "http")]
    pub use crate::HttpSource;
}
