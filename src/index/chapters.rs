//! Book-name to chapter-code index.

use crate::common::error::{Error, Result};
use crate::common::record::{RecordConfig, RecordReader};
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Maps human-readable book names to the codes the remote scripture source
/// expects.
///
/// The backing source is a pipe-delimited record stream with two fields per
/// row, `code|name`, no header. Lookup is exact-match and case-sensitive;
/// the caller's configuration must use the same spelling the cache was
/// written with.
///
/// # Examples
///
/// ```no_run
/// use lection::index::ChapterCodeIndex;
///
/// # fn main() -> lection::Result<()> {
/// let index = ChapterCodeIndex::load("bible_chapter_codes.csv")?;
/// if let Some(code) = index.lookup("John") {
///     println!("John -> {}", code);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChapterCodeIndex {
    codes: HashMap<String, String>,
}

impl ChapterCodeIndex {
    /// Load the index from a record file.
    ///
    /// Fails with [`Error::DataUnavailable`] if the file cannot be opened or
    /// any row does not carry exactly the two expected fields.
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
        let mut codes = HashMap::new();

        while let Some(row) = records.next_record()? {
            let [code, name] = row.as_slice() else {
                return Err(Error::data_unavailable(
                    source,
                    format!("expected 2 fields per row, found {}", row.len()),
                ));
            };
            if code.is_empty() || name.is_empty() {
                return Err(Error::data_unavailable(source, "row with empty field"));
            }
            // The name keys the map; a repeated name keeps the last code seen
            codes.insert(name.clone(), code.clone());
        }

        debug!("loaded {} chapter codes from {}", codes.len(), source);
        Ok(Self { codes })
    }

    /// Look up the chapter code for a book name.
    ///
    /// Exact-match, case-sensitive, no normalization. Returns `None` for any
    /// name the source did not define.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.codes.get(name).map(String::as_str)
    }

    /// Number of book names in the index.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write as _;

    #[test]
    fn test_lookup_returns_stored_code() {
        let data = "1|Genesis\n43|John\n";
        let index = ChapterCodeIndex::from_records("test", Cursor::new(data)).unwrap();

        assert_eq!(index.lookup("Genesis"), Some("1"));
        assert_eq!(index.lookup("John"), Some("43"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_lookup_absent_name_is_none() {
        let data = "43|John\n";
        let index = ChapterCodeIndex::from_records("test", Cursor::new(data)).unwrap();

        assert_eq!(index.lookup("Mark"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let data = "43|John\n";
        let index = ChapterCodeIndex::from_records("test", Cursor::new(data)).unwrap();

        assert_eq!(index.lookup("john"), None);
        assert_eq!(index.lookup("JOHN"), None);
    }

    #[test]
    fn test_row_missing_field_fails() {
        let data = "43|John\n44\n";
        let err = ChapterCodeIndex::from_records("test", Cursor::new(data)).unwrap_err();

        assert!(matches!(err, Error::DataUnavailable { .. }));
    }

    #[test]
    fn test_row_with_empty_field_fails() {
        let data = "43|\n";
        let err = ChapterCodeIndex::from_records("test", Cursor::new(data)).unwrap_err();

        assert!(matches!(err, Error::DataUnavailable { .. }));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = ChapterCodeIndex::load("/nonexistent/chapter_codes.csv").unwrap_err();
        assert!(matches!(err, Error::DataUnavailable { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1|Genesis\n19|Psalms\n").unwrap();

        let index = ChapterCodeIndex::load(file.path()).unwrap();
        assert_eq!(index.lookup("Psalms"), Some("19"));
    }
}
