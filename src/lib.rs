//! # refscope-base
//!
//! Find-usages result aggregation for IDE tooling: turns the symbols and raw
//! hits of a symbol search into display-ready definition and reference items,
//! collects them while the search runs, and answers protocol requests with
//! the collected locations.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide          → Request handlers, protocol locations
//!   ↓
//! find_usages  → Result items, item factory, result sink, search service trait
//!   ↓
//! host         → Capabilities supplied by the platform (display, classification, ...)
//!   ↓
//! workspace    → Solution and document snapshots
//!   ↓
//! symbols      → Symbol model (kinds, locations, groups)
//!   ↓
//! base         → Primitives (FileId, TextRange, LineIndex, Span)
//! ```

// ============================================================================
// MODULES (dependency order: base → symbols → workspace → host → find_usages → ide)
// ============================================================================

/// Foundation types: FileId, TextRange, line/column conversion
pub mod base;

/// Error type shared by every operation
pub mod error;

/// Symbol model consumed by the pipeline
pub mod symbols;

/// Solution and document snapshots
pub mod workspace;

/// Host capabilities and their default implementations
pub mod host;

/// Find-usages items, factory and result sink
pub mod find_usages;

/// Protocol request handlers
pub mod ide;

// Re-export foundation types
pub use base::{FileId, LineCol, LineIndex, Position, Span, TextRange, TextSize};

pub use error::{FindUsagesError, Result};
pub use find_usages::{
    DefinitionItem, FindUsagesContext, FindUsagesOptions, FindUsagesService, SimpleFindUsagesContext,
    SourceReferenceItem,
};
pub use host::HostServices;
pub use symbols::{Location, Symbol, SymbolKind};
pub use workspace::{Document, Solution};
