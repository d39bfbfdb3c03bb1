//! Error types and handling infrastructure for rtfilter.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! the library error type.
//!
//! ## Error Kinds
//!
//! - **Data format**: a data line that is not exactly three comma-separated fields,
//!   or whose numeric fields do not parse. Carries the raw line.
//! - **Stream read**: the underlying reader failed. Always propagated, never turned
//!   into an empty result.

use thiserror::Error;

/// The main error type for rtfilter operations.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A data line could not be parsed into a record
    #[error("Invalid Data Line: {line}")]
    DataFormat { line: String },

    /// The input stream failed while being read
    #[error("Failed to read data stream: {source}")]
    StreamRead {
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for rtfilter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// Create a DataFormat error carrying the offending raw line
    pub fn data_format(line: impl Into<String>) -> Self {
        Self::DataFormat { line: line.into() }
    }

    /// Wrap an I/O failure raised while reading the data stream
    pub fn stream_read(source: std::io::Error) -> Self {
        Self::StreamRead { source }
    }

    /// Whether this error was caused by malformed input data
    pub fn is_data_format(&self) -> bool {
        matches!(self, Self::DataFormat { .. })
    }
}

// Any io::Error reaching the filter pipeline came from the stream itself
impl From<std::io::Error> for FilterError {
    fn from(err: std::io::Error) -> Self {
        Self::StreamRead { source: err }
    }
}
