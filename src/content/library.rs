//! Content library implementation.

use crate::common::error::{Error, Result};
use crate::content::types::{Passage, Reading};
use crate::index::{ChapterCodeIndex, ResponsiveReadingIndex};
use crate::scripture::{FetchConfig, HttpTransport, ScriptureResolver, Transport};
use std::path::Path;

/// The facade the deck renderer resolves content through.
///
/// Both indexes are loaded once when the library is opened and never mutated
/// afterwards; every resolution call reads them and, for scripture, performs
/// one blocking fetch. Calls are independent — repeating one is safe and has
/// no effect on any other.
///
/// Not intended for concurrent mutation; there is none. The library can be
/// shared read-only.
///
/// # Examples
///
/// ```no_run
/// use lection::{ContentLibrary, FetchConfig};
///
/// # fn main() -> lection::Result<()> {
/// let library = ContentLibrary::open(
///     "bible_chapter_codes.csv",
///     "responsive_reading.csv",
///     FetchConfig::default(),
/// )?;
///
/// let passage = library.resolve_scripture("John,3,16,3,18")?;
/// println!("{}: {} verses", passage.title, passage.lines.len());
/// # Ok(())
/// # }
/// ```
pub struct ContentLibrary<T: Transport = HttpTransport> {
    chapters: ChapterCodeIndex,
    readings: ResponsiveReadingIndex,
    transport: T,
    config: FetchConfig,
}

impl ContentLibrary<HttpTransport> {
    /// Open a library backed by the real HTTP transport.
    ///
    /// Loads the chapter-code and responsive-reading sources; either failing
    /// to load is fatal ([`Error::DataUnavailable`]).
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(
        chapter_codes: P,
        readings: Q,
        config: FetchConfig,
    ) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(chapter_codes, readings, config, transport)
    }
}

impl<T: Transport> ContentLibrary<T> {
    /// Open a library with a caller-supplied transport.
    ///
    /// This is the seam tests use to resolve against canned responses; it is
    /// also how an alternative scripture source would be wired in.
    pub fn with_transport<P: AsRef<Path>, Q: AsRef<Path>>(
        chapter_codes: P,
        readings: Q,
        config: FetchConfig,
        transport: T,
    ) -> Result<Self> {
        Ok(Self {
            chapters: ChapterCodeIndex::load(chapter_codes)?,
            readings: ResponsiveReadingIndex::load(readings)?,
            transport,
            config,
        })
    }

    /// Assemble a library from already-built indexes.
    pub fn from_parts(
        chapters: ChapterCodeIndex,
        readings: ResponsiveReadingIndex,
        config: FetchConfig,
        transport: T,
    ) -> Self {
        Self {
            chapters,
            readings,
            transport,
            config,
        }
    }

    /// Resolve a raw passage reference, e.g. `"John,3,16,3,18"`.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedReference`] when the string does not parse into
    ///   exactly five fields with positive integer bounds
    /// - [`Error::UnknownChapter`] when the book is not in the code index
    /// - [`Error::UpstreamUnavailable`] when the remote source fails
    pub fn resolve_scripture(&self, raw_reference: &str) -> Result<Passage> {
        let reference = raw_reference.parse()?;
        ScriptureResolver::new(&self.chapters, &self.transport, &self.config.base_url)
            .resolve(&reference)
    }

    /// Resolve a raw responsive-reading index, e.g. `"27"`.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedReference`] when the string is not an integer
    /// - [`Error::ReadingNotFound`] when no reading carries the index
    pub fn resolve_responsive_reading(&self, raw_index: &str) -> Result<Reading> {
        let index: u32 = raw_index.trim().parse().map_err(|_| {
            Error::MalformedReference(format!(
                "responsive reading index '{raw_index}' is not an integer"
            ))
        })?;

        let reading = self
            .readings
            .lookup(index)
            .ok_or(Error::ReadingNotFound(index))?;

        Ok(Reading {
            title: reading.title.clone(),
            lines: reading.lines.clone(),
        })
    }

    /// The loaded chapter-code index.
    pub fn chapter_codes(&self) -> &ChapterCodeIndex {
        &self.chapters
    }

    /// The loaded responsive-reading index.
    pub fn responsive_readings(&self) -> &ResponsiveReadingIndex {
        &self.readings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripture::TransportResponse;
    use std::cell::Cell;
    use std::io::Cursor;

    struct StubTransport {
        status: u16,
        body: &'static str,
        calls: Cell<usize>,
    }

    impl StubTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                calls: Cell::new(0),
            }
        }
    }

    impl Transport for StubTransport {
        fn get(&self, _url: &str) -> Result<TransportResponse> {
            self.calls.set(self.calls.get() + 1);
            Ok(TransportResponse {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    fn library(transport: StubTransport) -> ContentLibrary<StubTransport> {
        let chapters =
            ChapterCodeIndex::from_records("chapters", Cursor::new("43|John\n")).unwrap();
        let readings = ResponsiveReadingIndex::from_records(
            "readings",
            Cursor::new("1|Psalm 1|Blessed is the man\n1|Psalm 1|who walks not\n27|Psalm 27|The Lord is my light\n"),
        )
        .unwrap();
        ContentLibrary::from_parts(chapters, readings, FetchConfig::default(), transport)
    }

    #[test]
    fn test_resolve_scripture_end_to_end() {
        let body = "<p>3:16</p><p>For God so loved</p>";
        let lib = library(StubTransport::new(200, body));

        let passage = lib.resolve_scripture("John,3,16,3,16").unwrap();

        assert_eq!(passage.title, "John 3:16-3:16");
        assert_eq!(passage.lines.len(), 1);
        assert_eq!(passage.lines[0].label, "3:16");
    }

    #[test]
    fn test_malformed_reference_rejected_before_fetch() {
        let lib = library(StubTransport::new(200, ""));

        let err = lib.resolve_scripture("John,3,16").unwrap_err();

        assert!(matches!(err, Error::MalformedReference(_)));
        assert_eq!(lib.transport.calls.get(), 0);
    }

    #[test]
    fn test_unknown_chapter_surfaces_book_name() {
        let lib = library(StubTransport::new(200, ""));

        let err = lib.resolve_scripture("Obadiah,1,1,1,2").unwrap_err();

        assert!(matches!(err, Error::UnknownChapter(ref book) if book == "Obadiah"));
        assert_eq!(lib.transport.calls.get(), 0);
    }

    #[test]
    fn test_resolve_responsive_reading() {
        let lib = library(StubTransport::new(200, ""));

        let reading = lib.resolve_responsive_reading("1").unwrap();

        assert_eq!(reading.title, "Psalm 1");
        assert_eq!(reading.lines, vec!["Blessed is the man", "who walks not"]);
    }

    #[test]
    fn test_reading_index_tolerates_whitespace() {
        let lib = library(StubTransport::new(200, ""));
        assert!(lib.resolve_responsive_reading(" 27 ").is_ok());
    }

    #[test]
    fn test_missing_reading_is_not_found_never_stale() {
        let lib = library(StubTransport::new(200, ""));

        // A hit first, so a sloppy implementation would have a lingering title
        lib.resolve_responsive_reading("27").unwrap();
        let err = lib.resolve_responsive_reading("99").unwrap_err();

        assert!(matches!(err, Error::ReadingNotFound(99)));
    }

    #[test]
    fn test_non_integer_reading_index_is_malformed() {
        let lib = library(StubTransport::new(200, ""));

        let err = lib.resolve_responsive_reading("twenty-seven").unwrap_err();
        assert!(matches!(err, Error::MalformedReference(_)));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let body = "<p>3:16</p><p>For God so loved</p>";
        let lib = library(StubTransport::new(200, body));

        let first = lib.resolve_scripture("John,3,16,3,16").unwrap();
        let second = lib.resolve_scripture("John,3,16,3,16").unwrap();

        assert_eq!(first, second);
        assert_eq!(lib.transport.calls.get(), 2);
    }
}
