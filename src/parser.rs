//! Line parsing for delimited request data.
//!
//! Every input stream starts with a header line that is skipped without being
//! inspected. Each following line must hold exactly three comma-separated fields:
//! `timestamp,countryCode,responseTime`. A single malformed line is fatal to the
//! whole read; there is no skipping of bad lines.

use crate::error::{FilterError, Result};
use crate::record::Record;
use log::trace;
use std::io::{BufRead, BufReader, Read};
use std::iter::FusedIterator;

/// Field separator within a data line
pub const DELIMITER: char = ',';

/// Number of fields a valid data line splits into
pub const EXPECTED_FIELD_COUNT: usize = 3;

/// Parse a single data line into a [`Record`]
///
/// # Error Cases
/// - The line does not split into exactly [`EXPECTED_FIELD_COUNT`] fields. A line
///   ending in the delimiter has an extra empty field and is rejected.
/// - The timestamp or response time field is not a valid `i64`.
///
/// Both cases produce [`FilterError::DataFormat`] carrying the line verbatim.
pub fn parse_line(line: &str) -> Result<Record> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != EXPECTED_FIELD_COUNT {
        return Err(FilterError::data_format(line));
    }

    let parse_number = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|_| FilterError::data_format(line))
    };

    Ok(Record::new(
        parse_number(fields[0])?,
        fields[1],
        parse_number(fields[2])?,
    ))
}

/// Iterator over the records of a header-prefixed stream
///
/// The first line is consumed as raw bytes and discarded on the first call to
/// `next`, so its content (encoding included) never matters. Every further line
/// is parsed with [`parse_line`]. Once an error has been yielded the iterator is
/// exhausted, so collecting into `Result<Vec<_>>` stops at the first bad line.
#[derive(Debug)]
pub struct RecordReader<R> {
    reader: R,
    line: String,
    header_skipped: bool,
    failed: bool,
    lines_read: u64,
}

impl<R: Read> RecordReader<BufReader<R>> {
    /// Wrap an unbuffered reader
    pub fn from_reader(source: R) -> Self {
        Self::new(BufReader::new(source))
    }
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            header_skipped: false,
            failed: false,
            lines_read: 0,
        }
    }

    /// Number of data lines pulled from the stream so far (header excluded)
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    fn fail(&mut self, err: FilterError) -> Option<Result<Record>> {
        self.failed = true;
        Some(Err(err))
    }

    fn skip_header(&mut self) -> std::io::Result<()> {
        let skipped = self.reader.read_until(b'\n', &mut Vec::new())?;
        trace!("skipped header line ({skipped} bytes)");
        Ok(())
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if !self.header_skipped {
            self.header_skipped = true;
            if let Err(e) = self.skip_header() {
                return self.fail(FilterError::stream_read(e));
            }
        }

        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => None,
            Ok(_) => {
                // Same terminators as BufRead::lines: "\n" or "\r\n"
                if self.line.ends_with('\n') {
                    self.line.pop();
                    if self.line.ends_with('\r') {
                        self.line.pop();
                    }
                }
                self.lines_read += 1;
                match parse_line(&self.line) {
                    Ok(record) => Some(Ok(record)),
                    Err(e) => self.fail(e),
                }
            }
            Err(e) => self.fail(FilterError::stream_read(e)),
        }
    }
}

impl<R: BufRead> FusedIterator for RecordReader<R> {}
