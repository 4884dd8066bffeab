//! Reference items and the raw search hits they are built from.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::symbols::Location;
use crate::workspace::Document;

use super::{DefinitionItem, DocumentSpan};

/// Extra key/value data attached to a reference by the search that found it.
pub type ReferenceProperties = IndexMap<String, String>;

/// How a value symbol is used at a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueUsage {
    Read,
    Write,
    ReadWrite,
    /// Passed by reference (`ref x`, `out x`).
    Reference,
    /// Only the name is used (`nameof(x)`).
    Name,
}

/// How a type or namespace is used at a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeOrNamespaceUsage {
    Qualified,
    TypeArgument,
    TypeConstraint,
    Base,
    ObjectCreation,
    NamespaceDeclaration,
}

/// The usage kind of one reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolUsageInfo {
    Value(ValueUsage),
    TypeOrNamespace(TypeOrNamespaceUsage),
}

impl Default for SymbolUsageInfo {
    fn default() -> Self {
        SymbolUsageInfo::Value(ValueUsage::Read)
    }
}

impl SymbolUsageInfo {
    pub fn is_read(&self) -> bool {
        matches!(
            self,
            SymbolUsageInfo::Value(ValueUsage::Read | ValueUsage::ReadWrite | ValueUsage::Reference)
        )
    }

    pub fn is_write(&self) -> bool {
        matches!(
            self,
            SymbolUsageInfo::Value(ValueUsage::Write | ValueUsage::ReadWrite | ValueUsage::Reference)
        )
    }
}

/// A raw reference found by the search engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceLocation {
    pub document: Arc<Document>,
    /// Expected to be a source location in `document`.
    pub location: Location,
    pub usage: SymbolUsageInfo,
    pub additional_properties: ReferenceProperties,
    /// The reference is implied by the code (e.g. a `foreach` calling
    /// `GetEnumerator`) rather than written out.
    pub is_implicit: bool,
}

impl ReferenceLocation {
    pub fn new(document: Arc<Document>, location: Location) -> Self {
        Self {
            document,
            location,
            usage: SymbolUsageInfo::default(),
            additional_properties: ReferenceProperties::new(),
            is_implicit: false,
        }
    }

    pub fn with_usage(mut self, usage: SymbolUsageInfo) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_properties.insert(key.into(), value.into());
        self
    }

    pub fn implicit(mut self) -> Self {
        self.is_implicit = true;
        self
    }
}

/// One occurrence of a definition in source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceReferenceItem {
    definition: Arc<DefinitionItem>,
    span: DocumentSpan,
    usage: SymbolUsageInfo,
    additional_properties: ReferenceProperties,
}

impl SourceReferenceItem {
    pub fn new(
        definition: Arc<DefinitionItem>,
        span: DocumentSpan,
        usage: SymbolUsageInfo,
        additional_properties: ReferenceProperties,
    ) -> Self {
        Self {
            definition,
            span,
            usage,
            additional_properties,
        }
    }

    pub fn definition(&self) -> &Arc<DefinitionItem> {
        &self.definition
    }

    pub fn span(&self) -> &DocumentSpan {
        &self.span
    }

    pub fn usage(&self) -> SymbolUsageInfo {
        self.usage
    }

    pub fn additional_properties(&self) -> &ReferenceProperties {
        &self.additional_properties
    }
}
