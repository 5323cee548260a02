//! Responsive-reading index.

use crate::common::error::{Error, Result};
use crate::common::record::{RecordConfig, RecordReader};
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One responsive reading: a title and its call-and-response lines in
/// reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveReading {
    /// Title shown on the reading's cover slide
    pub title: String,
    /// Lines in source order; leader and congregation alternate
    pub lines: Vec<String>,
}

/// Maps a reading number to its title and lines.
///
/// The backing source carries three pipe-delimited fields per row,
/// `index|title|line`, where the title repeats on every row of a reading and
/// each row contributes one line. Rows sharing an index accumulate into one
/// reading in source order, whether or not they are contiguous, and the
/// first row seen for an index fixes its title. Reading numbers need not be
/// contiguous.
#[derive(Debug, Clone)]
pub struct ResponsiveReadingIndex {
    readings: HashMap<u32, ResponsiveReading>,
}

impl ResponsiveReadingIndex {
    /// Load the index from a record file.
    ///
    /// Fails with [`Error::DataUnavailable`] if the file cannot be opened,
    /// a row does not carry exactly three fields, or an index field is not
    /// an integer.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::data_unavailable(&source, e.to_string()))?;
        Self::from_records(&source, file)
    }

    /// Build the index from any record stream.
    ///
    /// `source` names the stream in error messages.
    pub fn from_records<R: Read>(source: &str, reader: R) -> Result<Self> {
        let mut records = RecordReader::new(reader, RecordConfig::default());
        let mut readings: HashMap<u32, ResponsiveReading> = HashMap::new();
        let mut rows = 0usize;

        while let Some(row) = records.next_record()? {
            let [index, title, line] = row.as_slice() else {
                return Err(Error::data_unavailable(
                    source,
                    format!("expected 3 fields per row, found {}", row.len()),
                ));
            };
            let index: u32 = index.parse().map_err(|_| {
                Error::data_unavailable(source, format!("non-numeric reading index '{index}'"))
            })?;

            // First row seen for an index fixes the title; later rows only
            // contribute lines
            readings
                .entry(index)
                .or_insert_with(|| ResponsiveReading {
                    title: title.clone(),
                    lines: Vec::new(),
                })
                .lines
                .push(line.clone());
            rows += 1;
        }

        debug!(
            "loaded {} responsive readings ({} rows) from {}",
            readings.len(),
            rows,
            source
        );
        Ok(Self { readings })
    }

    /// Look up a reading by its number.
    ///
    /// Returns `None` when no row carried the index; content from other
    /// indexes never leaks into a miss.
    pub fn lookup(&self, index: u32) -> Option<&ResponsiveReading> {
        self.readings.get(&index)
    }

    /// Number of distinct readings in the index.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the index holds no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
