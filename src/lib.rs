//! Lection - content resolution for worship slide decks
//!
//! This library turns the terse configuration references found in a weekly
//! worship-service plan into structured presentation content: a scripture
//! passage fetched from a remote source and labeled per verse, and a locally
//! cached responsive reading retrieved by its number. The slide renderer that
//! lays the results onto templates is an external consumer of this crate.
//!
//! # Features
//!
//! - **Passage resolution**: `"John,3,16,3,18"` becomes a formatted title plus
//!   an ordered sequence of labeled verse lines
//! - **Responsive readings**: a numeric index becomes a title plus the
//!   call-and-response lines, grouped correctly regardless of row order
//! - **Typed failures**: unknown books, unreachable sources, and malformed
//!   references each surface as a distinct error, never a partial result
//! - **Pluggable transport**: the remote fetch sits behind a trait, so tests
//!   run without a network
//!
//! # Example - Resolving a passage
//!
//! ```no_run
//! use lection::{ContentLibrary, FetchConfig};
//!
//! # fn main() -> lection::Result<()> {
//! let library = ContentLibrary::open(
//!     "bible_chapter_codes.csv",
//!     "responsive_reading.csv",
//!     FetchConfig::default(),
//! )?;
//!
//! let passage = library.resolve_scripture("John,3,16,3,18")?;
//! println!("{}", passage.title);
//! for line in &passage.lines {
//!     println!("{} - {}", line.label, line.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Resolving a responsive reading
//!
//! ```no_run
//! use lection::{ContentLibrary, FetchConfig};
//!
//! # fn main() -> lection::Result<()> {
//! let library = ContentLibrary::open(
//!     "bible_chapter_codes.csv",
//!     "responsive_reading.csv",
//!     FetchConfig::default(),
//! )?;
//!
//! let reading = library.resolve_responsive_reading("27")?;
//! println!("{}", reading.title);
//! for line in &reading.lines {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

/// Shared error types and the delimited record reader.
///
/// Every fallible operation in the crate returns
/// [`common::Result`](common::error::Result), and the two index loaders plus
/// the service plan all consume the same pipe-delimited record format through
/// [`common::record`].
pub mod common;

/// The facade the renderer talks to.
///
/// [`ContentLibrary`](content::ContentLibrary) owns both indexes and the
/// transport, and resolves raw configuration strings into owned result values.
pub mod content;

/// Static lookup indexes loaded once at startup.
///
/// - [`ChapterCodeIndex`](index::ChapterCodeIndex): book name to the code the
///   remote source addresses chapters by
/// - [`ResponsiveReadingIndex`](index::ResponsiveReadingIndex): reading number
///   to title and lines
pub mod index;

/// Worship-service configuration records.
///
/// [`ServiceInfo`](plan::ServiceInfo) reads the weekly key-value plan file and
/// exposes typed accessors for the fields the deck build consumes.
pub mod plan;

/// Remote scripture resolution.
///
/// - [`PassageReference`](scripture::PassageReference): parsed passage bounds
/// - [`ScriptureResolver`](scripture::ScriptureResolver): lookup, fetch, and
///   verse pairing
/// - [`Transport`](scripture::Transport): the seam the HTTP client sits behind
pub mod scripture;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use content::{ContentLibrary, Passage, Reading, VerseLine};
pub use scripture::{FetchConfig, PassageReference};
