//! Filter engine over header-prefixed record streams.
//!
//! Every operation takes ownership of its source, skips the header line, parses
//! each remaining line and keeps the records that pass a predicate. The source is
//! dropped before the operation returns, whether it succeeds or fails. Any parse
//! or read failure aborts the call; partial results are never returned.

use crate::error::Result;
use crate::parser::RecordReader;
use crate::record::Record;
use log::debug;
use std::io::Read;

/// Threshold used by [`filter_by_country`]: only strictly positive response times match
pub const DEFAULT_RESPONSE_TIME_LIMIT: i64 = 0;

/// Predicate matching one country with a strict response time lower bound
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryFilter {
    country: String,
    limit: i64,
}

impl CountryFilter {
    /// Match `country` exactly (case-sensitive) with the default limit
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            limit: DEFAULT_RESPONSE_TIME_LIMIT,
        }
    }

    /// Require response times strictly greater than `limit`
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Check if a record matches this filter
    pub fn matches(&self, record: &Record) -> bool {
        record.country_code() == self.country && record.response_time() > self.limit
    }

    /// Read `source` and keep the matching records in input order
    pub fn apply<R: Read>(&self, source: R) -> Result<Vec<Record>> {
        let mut reader = RecordReader::from_reader(source);
        let mut matched = Vec::new();

        for record in reader.by_ref() {
            let record = record?;
            if self.matches(&record) {
                matched.push(record);
            }
        }

        debug!(
            "country filter {:?} (limit {}): {} of {} records matched",
            self.country,
            self.limit,
            matched.len(),
            reader.lines_read()
        );
        Ok(matched)
    }
}

/// Records from `country` with a positive response time
///
/// Same as [`filter_by_country_with_response_time_above_limit`] with a limit of
/// [`DEFAULT_RESPONSE_TIME_LIMIT`].
pub fn filter_by_country<R: Read>(source: R, country: &str) -> Result<Vec<Record>> {
    CountryFilter::new(country).apply(source)
}

/// Records from `country` whose response time is strictly greater than `limit`
pub fn filter_by_country_with_response_time_above_limit<R: Read>(
    source: R,
    country: &str,
    limit: i64,
) -> Result<Vec<Record>> {
    CountryFilter::new(country).with_limit(limit).apply(source)
}

/// Records whose response time is strictly greater than the truncated average
///
/// The whole stream is parsed before filtering, so a malformed line anywhere
/// fails the call. An empty or header-only stream yields an empty result.
/// Matching records keep their input order.
pub fn filter_by_response_time_above_average<R: Read>(source: R) -> Result<Vec<Record>> {
    let records = RecordReader::from_reader(source).collect::<Result<Vec<_>>>()?;

    let Some(average) = truncated_average(&records) else {
        debug!("no data records, nothing to average");
        return Ok(Vec::new());
    };

    let total = records.len();
    let matched: Vec<Record> = records
        .into_iter()
        .filter(|record| record.response_time() > average)
        .collect();

    debug!(
        "average response time {}: {} of {} records above",
        average,
        matched.len(),
        total
    );
    Ok(matched)
}

/// Mean response time using integer division truncated toward zero
///
/// Returns `None` for an empty slice. The sum is accumulated in `i128`, so the
/// result is exact for any slice of `i64` response times that fits in memory.
pub fn truncated_average(records: &[Record]) -> Option<i64> {
    if records.is_empty() {
        return None;
    }

    let sum: i128 = records.iter().map(|r| i128::from(r.response_time())).sum();
    let average = sum / records.len() as i128;

    // The mean of i64 values always lies within i64 range
    i64::try_from(average).ok()
}
