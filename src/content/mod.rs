//! Unified content facade for the deck renderer.
//!
//! [`ContentLibrary`] loads both lookup indexes once, holds the transport,
//! and resolves the raw configuration strings found in the service plan into
//! owned, renderer-ready values. Results are produced fresh per call;
//! nothing is cached or shared between calls.
//!
//! # Example
//!
//! ```no_run
//! use lection::content::ContentLibrary;
//! use lection::scripture::FetchConfig;
//!
//! # fn main() -> lection::Result<()> {
//! let library = ContentLibrary::open(
//!     "bible_chapter_codes.csv",
//!     "responsive_reading.csv",
//!     FetchConfig::default(),
//! )?;
//!
//! let passage = library.resolve_scripture("John,3,16,3,18")?;
//! let reading = library.resolve_responsive_reading("27")?;
//! println!("{} / {}", passage.title, reading.title);
//! # Ok(())
//! # }
//! ```

// Submodule declarations
mod library;
mod types;

// Re-exports
pub use library::ContentLibrary;
pub use types::{Passage, Reading, VerseLine};
