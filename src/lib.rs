//! # rtfilter - Request Record Filtering
//!
//! Parses header-prefixed, comma-separated request records
//! (`timestamp,countryCode,responseTime`) from any [`std::io::Read`] source and
//! answers three queries over them.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`record`] - The parsed record value type
//! - [`parser`] - Line parsing and the header-skipping record iterator
//! - [`filter`] - The filter operations
//!
//! The caller owns opening the stream; every operation takes it by value and
//! drops it before returning.
//!
//! ## Example
//!
//! ```
//! let data = "REQUEST_TIMESTAMP,COUNTRY_CODE,RESPONSE_TIME\n1431592497,GB,200\n";
//! let matches = rtfilter::filter_by_country(data.as_bytes(), "GB")?;
//! assert_eq!(matches[0].to_string(), "1431592497,GB,200");
//! # Ok::<(), rtfilter::FilterError>(())
//! ```

// Core modules
pub mod error;
pub mod parser;
pub mod record;

// Filter operations
pub mod filter;

// Re-export commonly used types for convenience
pub use error::{FilterError, Result};

// Public API surface for external usage
pub use filter::{
    filter_by_country, filter_by_country_with_response_time_above_limit,
    filter_by_response_time_above_average, truncated_average, CountryFilter,
};
pub use parser::{parse_line, RecordReader};
pub use record::Record;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
