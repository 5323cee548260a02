//! Weekly worship-service configuration records.
//!
//! The service plan is a small pipe-delimited `key|value` file the deck
//! build reads once per run: which responsive reading, who prays, who reads
//! scripture, what the sermon is. This module loads those records and
//! exposes typed accessors for the fields the renderer consumes; the
//! worship-order sequencing that decides which slides to emit lives with
//! the renderer, not here.
//!
//! # Example
//!
//! ```no_run
//! use lection::plan::ServiceInfo;
//!
//! # fn main() -> lection::Result<()> {
//! let info = ServiceInfo::load("worship_info.csv")?;
//! if let Some(reference) = info.scripture_reference() {
//!     println!("this week's passage: {reference}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::common::error::{Error, Result};
use crate::common::record::{RecordConfig, RecordReader};
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Sermon configuration: title and speaker, from the two-field comma form
/// `"title,speaker"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SermonInfo {
    pub title: String,
    pub speaker: String,
}

impl FromStr for SermonInfo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        let [title, speaker] = fields.as_slice() else {
            return Err(Error::MalformedReference(format!(
                "expected 'title,speaker', found '{s}'"
            )));
        };
        if title.is_empty() || speaker.is_empty() {
            return Err(Error::MalformedReference(format!(
                "empty sermon title or speaker in '{s}'"
            )));
        }
        Ok(SermonInfo {
            title: title.to_string(),
            speaker: speaker.to_string(),
        })
    }
}

/// The week's service configuration, one value per key.
///
/// Keys are free-form; the typed accessors name the ones the deck build
/// uses. A repeated key keeps the last value seen. A key the file omits is
/// simply absent — which sections a given week's deck needs is the
/// renderer's call.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    entries: HashMap<String, String>,
}

impl ServiceInfo {
    /// Load the plan from a record file.
    ///
    /// Fails with [`Error::DataUnavailable`] if the file cannot be opened or
    /// a row does not carry exactly the two expected fields.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::data_unavailable(&source, e.to_string()))?;
        Self::from_records(&source, file)
    }

    /// Build the plan from any record stream.
    pub fn from_records<R: Read>(source: &str, reader: R) -> Result<Self> {
        let mut records = RecordReader::new(reader, RecordConfig::default());
        let mut entries = HashMap::new();

        while let Some(row) = records.next_record()? {
            let [key, value] = row.as_slice() else {
                return Err(Error::data_unavailable(
                    source,
                    format!("expected 2 fields per row, found {}", row.len()),
                ));
            };
            if key.is_empty() {
                return Err(Error::data_unavailable(source, "row with empty key"));
            }
            // Last value wins on repeated keys
            entries.insert(key.clone(), value.clone());
        }

        debug!("loaded {} service plan entries from {}", entries.len(), source);
        Ok(Self { entries })
    }

    /// Raw value for `key`, if the plan defines it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Responsive-reading index for the week (`rr`), still unparsed.
    pub fn reading_index(&self) -> Option<&str> {
        self.get("rr")
    }

    /// Who leads the congregational prayer (`prayer`).
    pub fn prayer_leader(&self) -> Option<&str> {
        self.get("prayer")
    }

    /// Who leads the offering praise (`offering`).
    pub fn offering_leader(&self) -> Option<&str> {
        self.get("offering")
    }

    /// The week's passage reference (`bible`), still unparsed.
    pub fn scripture_reference(&self) -> Option<&str> {
        self.get("bible")
    }

    /// Who reads the scripture (`reader`).
    pub fn scripture_reader(&self) -> Option<&str> {
        self.get("reader")
    }

    /// Sermon title and speaker (`sermon`), parsed from `"title,speaker"`.
    ///
    /// Returns `Ok(None)` when the plan has no sermon entry and
    /// [`Error::MalformedReference`] when the entry has the wrong shape.
    pub fn sermon(&self) -> Result<Option<SermonInfo>> {
        self.get("sermon").map(str::parse).transpose()
    }

    /// Number of entries in the plan.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
