//! Definition items: the display and navigation record for one logical
//! definition in a find-usages result.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::{FileId, TextRange};
use crate::host::{ClassifiedSpans, GlyphTags, TaggedText};
use crate::symbols::Symbol;
use crate::workspace::Document;

/// Opaque display-only key/value pairs contributed by extensions.
pub type DisplayableProperties = IndexMap<String, String>;

/// Keys of the definition property bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// The definition is the primary result of the query.
    Primary,
    /// Cross-reference name of the symbol.
    RQNameKey1,
    /// Cross-reference name of a constructor's containing type.
    RQNameKey2,
}

impl PropertyKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKey::Primary => "Primary",
            PropertyKey::RQNameKey1 => "RQNameKey1",
            PropertyKey::RQNameKey2 => "RQNameKey2",
        }
    }
}

/// The property bag of a definition item.
///
/// Only the three known keys can be present; extension data goes to
/// [`DisplayableProperties`] instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefinitionProperties {
    pub primary: bool,
    pub rq_name_key1: Option<String>,
    pub rq_name_key2: Option<String>,
}

impl DefinitionProperties {
    /// The keys that are present.
    pub fn keys(&self) -> impl Iterator<Item = PropertyKey> + '_ {
        [
            self.primary.then_some(PropertyKey::Primary),
            self.rq_name_key1.as_ref().map(|_| PropertyKey::RQNameKey1),
            self.rq_name_key2.as_ref().map(|_| PropertyKey::RQNameKey2),
        ]
        .into_iter()
        .flatten()
    }

    /// Value of `key`. The primary marker has an empty value.
    pub fn get(&self, key: PropertyKey) -> Option<&str> {
        match key {
            PropertyKey::Primary => self.primary.then_some(""),
            PropertyKey::RQNameKey1 => self.rq_name_key1.as_deref(),
            PropertyKey::RQNameKey2 => self.rq_name_key2.as_deref(),
        }
    }

    pub fn contains(&self, key: PropertyKey) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A span in a specific document snapshot, optionally with classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSpan {
    pub document: Arc<Document>,
    pub range: TextRange,
    pub classified: Option<ClassifiedSpans>,
}

impl DocumentSpan {
    pub fn new(document: Arc<Document>, range: TextRange) -> Self {
        Self {
            document,
            range,
            classified: None,
        }
    }

    pub fn with_classification(document: Arc<Document>, range: TextRange, classified: ClassifiedSpans) -> Self {
        Self {
            document,
            range,
            classified: Some(classified),
        }
    }

    pub fn file(&self) -> FileId {
        self.document.id()
    }

    /// The classified context text, if this span was classified.
    pub fn classified_text(&self) -> Option<&str> {
        self.classified.as_ref()?.text(&self.document)
    }
}

/// How a definition can be navigated to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefinitionNavigation {
    /// One or more spans in source documents.
    Source(Vec<DocumentSpan>),
    /// The definition lives in a compiled module.
    Metadata { module: Arc<str>, symbol: Arc<Symbol> },
    /// Shown, but not navigable. Carries where the definition comes from.
    NonNavigable { origination_parts: Vec<TaggedText> },
}

/// Display and navigation data for one logical definition.
///
/// Built once by the definition factory and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionItem {
    tags: GlyphTags,
    display_parts: Vec<TaggedText>,
    name_display_parts: Vec<TaggedText>,
    navigation: DefinitionNavigation,
    properties: DefinitionProperties,
    displayable_properties: DisplayableProperties,
    display_if_no_references: bool,
}

impl DefinitionItem {
    /// A definition with source locations.
    pub fn create(
        tags: GlyphTags,
        display_parts: Vec<TaggedText>,
        source_spans: Vec<DocumentSpan>,
        name_display_parts: Vec<TaggedText>,
        properties: DefinitionProperties,
        displayable_properties: DisplayableProperties,
        display_if_no_references: bool,
    ) -> Self {
        Self {
            tags,
            display_parts,
            name_display_parts,
            navigation: DefinitionNavigation::Source(source_spans),
            properties,
            displayable_properties,
            display_if_no_references,
        }
    }

    /// A definition that lives in metadata.
    pub fn create_metadata_definition(
        tags: GlyphTags,
        display_parts: Vec<TaggedText>,
        name_display_parts: Vec<TaggedText>,
        module: Arc<str>,
        symbol: Arc<Symbol>,
        properties: DefinitionProperties,
        display_if_no_references: bool,
    ) -> Self {
        Self {
            tags,
            display_parts,
            name_display_parts,
            navigation: DefinitionNavigation::Metadata { module, symbol },
            properties,
            displayable_properties: DisplayableProperties::new(),
            display_if_no_references,
        }
    }

    /// A sentinel that is displayed but cannot be navigated to.
    pub fn create_non_navigable_item(
        tags: GlyphTags,
        display_parts: Vec<TaggedText>,
        origination_parts: Vec<TaggedText>,
        properties: DefinitionProperties,
        display_if_no_references: bool,
    ) -> Self {
        Self {
            tags,
            display_parts,
            name_display_parts: Vec::new(),
            navigation: DefinitionNavigation::NonNavigable { origination_parts },
            properties,
            displayable_properties: DisplayableProperties::new(),
            display_if_no_references,
        }
    }

    pub fn tags(&self) -> &GlyphTags {
        &self.tags
    }

    pub fn display_parts(&self) -> &[TaggedText] {
        &self.display_parts
    }

    pub fn name_display_parts(&self) -> &[TaggedText] {
        &self.name_display_parts
    }

    pub fn navigation(&self) -> &DefinitionNavigation {
        &self.navigation
    }

    pub fn properties(&self) -> &DefinitionProperties {
        &self.properties
    }

    pub fn displayable_properties(&self) -> &DisplayableProperties {
        &self.displayable_properties
    }

    pub fn display_if_no_references(&self) -> bool {
        self.display_if_no_references
    }

    pub fn is_primary(&self) -> bool {
        self.properties.primary
    }

    /// Source spans; empty for metadata and non-navigable definitions.
    pub fn source_spans(&self) -> &[DocumentSpan] {
        match &self.navigation {
            DefinitionNavigation::Source(spans) => spans,
            DefinitionNavigation::Metadata { .. } | DefinitionNavigation::NonNavigable { .. } => &[],
        }
    }

    pub fn is_metadata(&self) -> bool {
        matches!(self.navigation, DefinitionNavigation::Metadata { .. })
    }

    pub fn can_navigate(&self) -> bool {
        match &self.navigation {
            DefinitionNavigation::Source(spans) => !spans.is_empty(),
            DefinitionNavigation::Metadata { .. } => true,
            DefinitionNavigation::NonNavigable { .. } => false,
        }
    }

    /// Display text without classification.
    pub fn classified_text(&self) -> String {
        TaggedText::join(&self.display_parts)
    }

    /// True if both items carry the same tags, display and properties,
    /// regardless of navigation.
    pub fn same_presentation(&self, other: &DefinitionItem) -> bool {
        self.tags == other.tags
            && self.display_parts == other.display_parts
            && self.name_display_parts == other.name_display_parts
            && self.properties == other.properties
            && self.displayable_properties == other.displayable_properties
            && self.display_if_no_references == other.display_if_no_references
    }
}
