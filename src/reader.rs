//! Typed record reader for interleaved benchmark output
//!
//! Benchmark runs write a flat stream of `label<delim>value` pairs, one or
//! more per line:
//!
//! ```text
//! read_small:12.5:read_large:80.1
//! read_small:12.7
//! read_large:79.8
//! ```
//!
//! Newlines are equivalent to the delimiter, empty tokens are dropped, and
//! the remaining tokens are read as `(label, value)` records starting with a
//! label.

use crate::error::{AnalysisError, Result};

/// Default token delimiter written by the benchmark harness
pub const DEFAULT_DELIMITER: char = ':';

/// A single `(label, value)` pair from the input stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    /// Label token (discarded by the reducer, kept for reporting)
    pub label: &'a str,
    /// Parsed measurement
    pub value: f64,
    /// 0-based index of the label token in the non-empty token stream
    pub position: usize,
}

/// A label at the end of the stream with no value after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingLabel<'a> {
    /// Label token left without a value
    pub label: &'a str,
    /// 0-based index of the label token in the non-empty token stream
    pub position: usize,
}

/// All records read from one input, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStream<'a> {
    records: Vec<Record<'a>>,
    dangling: Option<DanglingLabel<'a>>,
}

impl<'a> RecordStream<'a> {
    pub fn records(&self) -> &[Record<'a>] {
        &self.records
    }

    /// Measurements in stream order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.value)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Trailing label that had no value, if the stream had an odd token count
    pub fn dangling_label(&self) -> Option<DanglingLabel<'a>> {
        self.dangling
    }
}

/// Reads `(label, value)` records separated by a delimiter or newline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordReader {
    delimiter: char,
}

impl Default for RecordReader {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl RecordReader {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Split text into non-empty tokens
    ///
    /// `\n` and `\r` separate tokens exactly like the delimiter does.
    pub fn tokens<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let delimiter = self.delimiter;
        text.split(move |c: char| c == delimiter || c == '\n' || c == '\r')
            .filter(|token| !token.is_empty())
    }

    /// Read the token stream as alternating label/value records
    ///
    /// Fails with [`AnalysisError::Parse`] on the first value token that is
    /// not a floating-point literal. Surrounding whitespace in a value token
    /// is ignored.
    pub fn read<'a>(&self, text: &'a str) -> Result<RecordStream<'a>> {
        let tokens: Vec<&str> = self.tokens(text).collect();
        let mut stream = RecordStream {
            records: Vec::with_capacity(tokens.len() / 2),
            dangling: None,
        };

        for (pair_idx, pair) in tokens.chunks(2).enumerate() {
            let position = pair_idx * 2;
            match *pair {
                [label, raw] => {
                    let value = parse_value(raw, position + 1)?;
                    stream.records.push(Record {
                        label,
                        value,
                        position,
                    });
                }
                [label] => {
                    stream.dangling = Some(DanglingLabel { label, position });
                }
                _ => unreachable!("chunks(2) yields one or two tokens"),
            }
        }

        tracing::debug!(
            tokens = tokens.len(),
            records = stream.records.len(),
            dangling = stream.dangling.is_some(),
            "read record stream"
        );

        Ok(stream)
    }
}

fn parse_value(raw: &str, position: usize) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AnalysisError::Parse {
            token: raw.to_string(),
            position,
        })
}
