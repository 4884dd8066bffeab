//! Symbol locations.

use std::sync::Arc;

use crate::base::{FileId, TextRange};

/// Where a symbol is declared or referenced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// A span inside a document of the solution.
    InSource(SourceLocation),
    /// Inside a compiled module with no source available.
    InMetadata(MetadataLocation),
    /// No location at all (synthesized symbols).
    None,
}

/// A span inside a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: FileId,
    pub range: TextRange,
    pub visibility: LocationVisibility,
}

/// Whether a source location is shown to the user.
///
/// Hidden locations come from generated regions (designer files, mapped
/// spans that have no user-visible counterpart) and are dropped unless the
/// caller asks for them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LocationVisibility {
    #[default]
    Visible,
    Hidden,
}

/// A location inside a compiled module.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MetadataLocation {
    pub module: Arc<str>,
}

impl Location {
    /// A visible source location.
    pub fn source(file: FileId, range: TextRange) -> Self {
        Location::InSource(SourceLocation {
            file,
            range,
            visibility: LocationVisibility::Visible,
        })
    }

    /// A hidden source location.
    pub fn hidden(file: FileId, range: TextRange) -> Self {
        Location::InSource(SourceLocation {
            file,
            range,
            visibility: LocationVisibility::Hidden,
        })
    }

    pub fn metadata(module: impl Into<Arc<str>>) -> Self {
        Location::InMetadata(MetadataLocation {
            module: module.into(),
        })
    }

    pub fn is_in_source(&self) -> bool {
        matches!(self, Location::InSource(_))
    }

    pub fn is_in_metadata(&self) -> bool {
        matches!(self, Location::InMetadata(_))
    }

    pub fn as_source(&self) -> Option<&SourceLocation> {
        match self {
            Location::InSource(source) => Some(source),
            Location::InMetadata(_) | Location::None => None,
        }
    }

    /// True only for source locations that are not hidden.
    pub fn is_visible_source_location(&self) -> bool {
        self.as_source().is_some_and(SourceLocation::is_visible)
    }
}

impl SourceLocation {
    pub fn is_visible(&self) -> bool {
        self.visibility == LocationVisibility::Visible
    }

    /// Whether this location survives the hidden-location filter.
    pub fn passes_filter(&self, include_hidden_locations: bool) -> bool {
        self.is_visible() || include_hidden_locations
    }
}
