//! Unified error types for the lection library.
//!
//! This module provides one error type covering local data sources, remote
//! resolution, and configuration parsing, presenting a consistent API to
//! callers.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
