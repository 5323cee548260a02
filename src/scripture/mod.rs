//! Remote scripture resolution.
//!
//! A passage is resolved in three steps: the book name is translated to the
//! chapter code the remote source expects, a single blocking fetch retrieves
//! the passage page, and the markup-stripped body is paired into labeled
//! verse lines. Every step is synchronous and a failed resolution is
//! reported once, typed, with no retry and no partial result.
//!
//! # Example
//!
//! ```no_run
//! use lection::index::ChapterCodeIndex;
//! use lection::scripture::{FetchConfig, HttpTransport, ScriptureResolver};
//!
//! # fn main() -> lection::Result<()> {
//! let chapters = ChapterCodeIndex::load("bible_chapter_codes.csv")?;
//! let config = FetchConfig::default();
//! let transport = HttpTransport::new(&config)?;
//!
//! let resolver = ScriptureResolver::new(&chapters, &transport, &config.base_url);
//! let passage = resolver.resolve(&"John,3,16,3,18".parse()?)?;
//! println!("{}: {} verses", passage.title, passage.lines.len());
//! # Ok(())
//! # }
//! ```

// Submodule declarations
mod reference;
mod resolver;
mod tokens;
mod transport;

// Re-exports
pub use reference::PassageReference;
pub use resolver::ScriptureResolver;
pub use transport::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FetchConfig, HttpTransport, Transport, TransportResponse,
};
