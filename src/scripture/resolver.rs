//! Passage resolution against the remote scripture source.

use crate::common::error::{Error, Result};
use crate::content::{Passage, VerseLine};
use crate::index::ChapterCodeIndex;
use crate::scripture::reference::PassageReference;
use crate::scripture::tokens::strip_markup;
use crate::scripture::transport::Transport;
use log::{debug, warn};

/// Resolves a [`PassageReference`] into a titled sequence of verse lines.
///
/// The resolver borrows its collaborators; it holds no state of its own and
/// a fresh one can be built per call. Resolution is strictly sequential:
/// code lookup first (an unknown book never reaches the network), then one
/// fetch, then pairing of the stripped body.
pub struct ScriptureResolver<'a, T: Transport> {
    chapters: &'a ChapterCodeIndex,
    transport: &'a T,
    base_url: &'a str,
}

impl<'a, T: Transport> ScriptureResolver<'a, T> {
    /// Create a resolver over a chapter-code index and a transport.
    pub fn new(chapters: &'a ChapterCodeIndex, transport: &'a T, base_url: &'a str) -> Self {
        Self {
            chapters,
            transport,
            base_url,
        }
    }

    /// Resolve `reference` into a [`Passage`].
    ///
    /// The title is formatted locally from the reference, never fetched. The
    /// body's text tokens alternate label, text, label, text; a trailing
    /// unpaired label is discarded. An empty body yields an empty `lines`
    /// sequence, not an error — whether to skip the passage slides is the
    /// renderer's decision.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownChapter`] when the book is not in the index; the
    ///   transport is not invoked
    /// - [`Error::UpstreamUnavailable`] on a non-success status or when no
    ///   response arrived; never retried
    pub fn resolve(&self, reference: &PassageReference) -> Result<Passage> {
        let code = self
            .chapters
            .lookup(&reference.book)
            .ok_or_else(|| Error::UnknownChapter(reference.book.clone()))?;

        let url = format!("{}/{}/{}", self.base_url, code, reference.span());
        debug!("resolving '{reference}' via {url}");

        let response = self.transport.get(&url)?;
        if !(200..300).contains(&response.status) {
            return Err(Error::UpstreamUnavailable {
                status: Some(response.status),
                reason: format!("HTTP {}", response.status),
            });
        }

        let mut tokens = strip_markup(&response.body).into_iter();
        let mut lines = Vec::new();
        loop {
            let Some(label) = tokens.next() else { break };
            let Some(text) = tokens.next() else {
                warn!("discarding trailing verse label '{label}' with no text");
                break;
            };
            lines.push(VerseLine { label, text });
        }

        Ok(Passage {
            title: reference.to_string(),
            lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripture::transport::TransportResponse;
    use std::cell::{Cell, RefCell};
    use std::io::Cursor;

    /// Transport double that serves a canned response and counts calls.
    struct StubTransport {
        status: u16,
        body: &'static str,
        calls: Cell<usize>,
        urls: RefCell<Vec<String>>,
    }

    impl StubTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                calls: Cell::new(0),
                urls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for StubTransport {
        fn get(&self, url: &str) -> Result<TransportResponse> {
            self.calls.set(self.calls.get() + 1);
            self.urls.borrow_mut().push(url.to_string());
            Ok(TransportResponse {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    /// Transport double that fails as if the upstream never answered.
    struct UnreachableTransport {
        calls: Cell<usize>,
    }

    impl Transport for UnreachableTransport {
        fn get(&self, _url: &str) -> Result<TransportResponse> {
            self.calls.set(self.calls.get() + 1);
            Err(Error::UpstreamUnavailable {
                status: None,
                reason: "connection timed out".to_string(),
            })
        }
    }

    fn chapter_index() -> ChapterCodeIndex {
        ChapterCodeIndex::from_records("test", Cursor::new("43|John\n1|Genesis\n")).unwrap()
    }

    fn reference(raw: &str) -> PassageReference {
        raw.parse().unwrap()
    }

    #[test]
    fn test_resolve_pairs_labels_and_text() {
        let body = "<p>1:1</p><p>In the beginning</p><p>1:2</p><p>And the earth</p>";
        let transport = StubTransport::new(200, body);
        let chapters = chapter_index();
        let resolver = ScriptureResolver::new(&chapters, &transport, "http://base");

        let passage = resolver.resolve(&reference("Genesis,1,1,1,2")).unwrap();

        assert_eq!(
            passage.lines,
            vec![
                VerseLine {
                    label: "1:1".to_string(),
                    text: "In the beginning".to_string()
                },
                VerseLine {
                    label: "1:2".to_string(),
                    text: "And the earth".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_title_formatted_not_fetched() {
        let transport = StubTransport::new(200, "");
        let chapters = chapter_index();
        let resolver = ScriptureResolver::new(&chapters, &transport, "http://base");

        let passage = resolver.resolve(&reference("John,3,16,3,18")).unwrap();
        assert_eq!(passage.title, "John 3:16-3:18");
    }

    #[test]
    fn test_url_addresses_source_by_code_and_span() {
        let transport = StubTransport::new(200, "");
        let chapters = chapter_index();
        let resolver = ScriptureResolver::new(&chapters, &transport, "http://base");

        resolver.resolve(&reference("John,3,16,3,18")).unwrap();

        assert_eq!(transport.urls.borrow().as_slice(), ["http://base/43/3:16-3:18"]);
    }

    #[test]
    fn test_trailing_unpaired_token_dropped() {
        let body = "<p>1:1</p><p>text</p><p>1:2</p>";
        let transport = StubTransport::new(200, body);
        let chapters = chapter_index();
        let resolver = ScriptureResolver::new(&chapters, &transport, "http://base");

        let passage = resolver.resolve(&reference("John,1,1,1,2")).unwrap();

        assert_eq!(passage.lines.len(), 1);
        assert_eq!(passage.lines[0].label, "1:1");
        assert_eq!(passage.lines[0].text, "text");
    }

    #[test]
    fn test_empty_body_is_empty_lines_not_error() {
        let transport = StubTransport::new(200, "<html><body></body></html>");
        let chapters = chapter_index();
        let resolver = ScriptureResolver::new(&chapters, &transport, "http://base");

        let passage = resolver.resolve(&reference("John,3,16,3,18")).unwrap();
        assert_eq!(passage.title, "John 3:16-3:18");
        assert!(passage.lines.is_empty());
    }

    #[test]
    fn test_unknown_chapter_skips_network() {
        let transport = StubTransport::new(200, "");
        let chapters = chapter_index();
        let resolver = ScriptureResolver::new(&chapters, &transport, "http://base");

        let err = resolver.resolve(&reference("Mark,1,1,1,2")).unwrap_err();

        assert!(matches!(err, Error::UnknownChapter(ref book) if book == "Mark"));
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_non_success_status_fails_without_retry() {
        let transport = StubTransport::new(503, "unavailable");
        let chapters = chapter_index();
        let resolver = ScriptureResolver::new(&chapters, &transport, "http://base");

        let err = resolver.resolve(&reference("John,3,16,3,18")).unwrap_err();

        assert!(matches!(
            err,
            Error::UpstreamUnavailable {
                status: Some(503),
                ..
            }
        ));
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn test_transport_failure_surfaces_without_retry() {
        let transport = UnreachableTransport {
            calls: Cell::new(0),
        };
        let chapters = chapter_index();
        let resolver = ScriptureResolver::new(&chapters, &transport, "http://base");

        let err = resolver.resolve(&reference("John,3,16,3,18")).unwrap_err();

        assert!(matches!(err, Error::UpstreamUnavailable { status: None, .. }));
        assert_eq!(transport.calls.get(), 1);
    }
}
