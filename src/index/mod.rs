//! Static lookup indexes backing content resolution.
//!
//! Both indexes are built once from a local record source and never mutated
//! afterwards, so they are safe to share read-only across any number of
//! resolution calls.
//!
//! - [`ChapterCodeIndex`]: maps a human-readable book name to the chapter
//!   code the remote scripture source addresses passages by
//! - [`ResponsiveReadingIndex`]: maps a reading number to its title and
//!   ordered call-and-response lines

// Submodule declarations
mod chapters;
mod readings;

// Re-exports
pub use chapters::ChapterCodeIndex;
pub use readings::{ResponsiveReading, ResponsiveReadingIndex};
