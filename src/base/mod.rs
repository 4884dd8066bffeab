//! Foundation types for the refscope toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Interned document identifiers
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Span`] - Line/column ranges for boundary output
//!
//! This module has NO dependencies on other refscope modules.

mod file_id;
mod position;
mod span;

pub use file_id::FileId;
pub use position::{Position, Span};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
