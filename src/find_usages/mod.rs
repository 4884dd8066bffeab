//! Find-usages result model and aggregation.
//!
//! A search engine ([`FindUsagesService`]) streams definitions and references
//! into a [`FindUsagesContext`]. The [`factory`] functions turn symbols and raw
//! hits into the items the context stores; [`SimpleFindUsagesContext`] keeps
//! them until the request handler converts them to protocol locations.

mod context;
mod definition;
pub mod factory;
mod options;
mod reference;
mod service;

pub use context::{FindUsagesContext, SimpleFindUsagesContext};
pub use definition::{
    DefinitionItem, DefinitionNavigation, DefinitionProperties, DisplayableProperties, DocumentSpan, PropertyKey,
};
pub use factory::{
    third_party_definition_item, to_classified_definition_item, to_classified_definition_item_for_group,
    to_definition_item, to_non_classified_definition_item, to_non_classified_definition_item_blocking,
    try_create_source_reference_item,
};
pub use options::{FindReferencesSearchOptions, FindUsagesOptions};
pub use reference::{
    ReferenceLocation, ReferenceProperties, SourceReferenceItem, SymbolUsageInfo, TypeOrNamespaceUsage, ValueUsage,
};
pub use service::FindUsagesService;
