//! Renderer-facing result types.
//!
//! These are owned data values handed to the slide renderer; they keep no
//! reference into the library that produced them.

use serde::Serialize;

/// One verse: its reference label and its text.
///
/// Order matters (reading order) and labels are not unique — a passage
/// crossing a chapter boundary repeats verse numbers under new chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseLine {
    /// Verse reference label as the source printed it, e.g. `"3:16"`
    pub label: String,
    /// Verse text
    pub text: String,
}

/// A resolved scripture passage: cover title plus verse lines in document
/// order.
///
/// `lines` may be empty when the source answered with no content for the
/// requested span; the renderer decides whether to skip those slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passage {
    /// Cover-slide title, e.g. `"John 3:16-3:18"`
    pub title: String,
    pub lines: Vec<VerseLine>,
}

/// A resolved responsive reading: cover title plus its lines in reading
/// order. Leader and congregation lines alternate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub title: String,
    pub lines: Vec<String>,
}
