//! Passage reference parsing and formatting.

use crate::common::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A scripture passage identified by book and verse bounds.
///
/// Constructed from the 5-field configuration form
/// `"{book},{start_chapter},{start_verse},{end_chapter},{end_verse}"`, e.g.
/// `"John,3,16,3,18"`. All four bounds are positive integers and the book
/// name is non-empty; the value is immutable once parsed.
///
/// `Display` renders the title shown on the passage's cover slide:
/// `"John 3:16-3:18"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageReference {
    /// Human-readable book name as spelled in the chapter-code source
    pub book: String,
    pub start_chapter: u32,
    pub start_verse: u32,
    pub end_chapter: u32,
    pub end_verse: u32,
}

impl PassageReference {
    /// The verse-bound range in the form the remote source addresses
    /// passages by: `"{start_chapter}:{start_verse}-{end_chapter}:{end_verse}"`.
    pub fn span(&self) -> String {
        format!(
            "{}:{}-{}:{}",
            self.start_chapter, self.start_verse, self.end_chapter, self.end_verse
        )
    }
}

impl fmt::Display for PassageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.span())
    }
}

impl FromStr for PassageReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 5 {
            return Err(Error::MalformedReference(format!(
                "expected 5 comma-separated fields, found {} in '{s}'",
                fields.len()
            )));
        }

        let book = fields[0];
        if book.is_empty() {
            return Err(Error::MalformedReference(format!(
                "empty book name in '{s}'"
            )));
        }

        let mut parsed = [0u32; 4];
        for (slot, field) in parsed.iter_mut().zip(&fields[1..]) {
            *slot = field.parse().map_err(|_| {
                Error::MalformedReference(format!("'{field}' is not an integer in '{s}'"))
            })?;
            if *slot == 0 {
                return Err(Error::MalformedReference(format!(
                    "chapter and verse bounds must be positive in '{s}'"
                )));
            }
        }
        let [start_chapter, start_verse, end_chapter, end_verse] = parsed;

        Ok(PassageReference {
            book: book.to_string(),
            start_chapter,
            start_verse,
            end_chapter,
            end_verse,
        })
    }
}
