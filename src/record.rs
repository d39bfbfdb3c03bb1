//! The parsed request record.

use crate::error::FilterError;
use crate::parser::{parse_line, DELIMITER};
use std::fmt;
use std::str::FromStr;

/// One parsed data line: when the request happened, where it came from and how
/// long it took.
///
/// Records are immutable once parsed. Two records are equal iff all three fields
/// are equal. There is no ordering; collections of records keep input order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    request_timestamp: i64,
    country_code: String,
    response_time: i64,
}

impl Record {
    pub fn new(request_timestamp: i64, country_code: impl Into<String>, response_time: i64) -> Self {
        Self {
            request_timestamp,
            country_code: country_code.into(),
            response_time,
        }
    }

    /// Epoch-like request timestamp, range not validated
    pub fn request_timestamp(&self) -> i64 {
        self.request_timestamp
    }

    /// Raw country code token, untrimmed
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Response time, zero and negative values are kept as-is
    pub fn response_time(&self) -> i64 {
        self.response_time
    }
}

/// Renders the record back into its `timestamp,countryCode,responseTime` line.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.request_timestamp, self.country_code, self.response_time
        )
    }
}

impl FromStr for Record {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}
