//! Definition and reference item construction.
//!
//! Turns symbols and raw search hits into the display-ready items a
//! [`FindUsagesContext`](super::FindUsagesContext) collects. Host services do
//! the formatting, classification and document lookup; this module applies
//! the policy: which symbol represents a definition, which locations are
//! shown, and what the property bag holds.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::error::{FindUsagesError, Result, check_cancelled};
use crate::host::{GlyphTags, HostServices, TaggedText, TextTag};
use crate::symbols::{Location, Symbol, SymbolGroup, SymbolKind, original_definition};

use super::{
    DefinitionItem, DefinitionProperties, DocumentSpan, FindReferencesSearchOptions, ReferenceLocation,
    SourceReferenceItem,
};

/// Build a classified definition item for `definition` from its own locations.
pub async fn to_classified_definition_item(
    host: &HostServices,
    definition: &Arc<Symbol>,
    is_primary: bool,
    include_hidden_locations: bool,
    options: &FindReferencesSearchOptions,
    cancel: &CancellationToken,
) -> Result<DefinitionItem> {
    to_definition_item(
        host,
        definition,
        &definition.locations,
        is_primary,
        include_hidden_locations,
        true,
        options,
        cancel,
    )
    .await
}

/// Build one classified definition item covering every member of `group`.
///
/// The item is built for the first member, over the union of all members'
/// locations.
pub async fn to_classified_definition_item_for_group(
    host: &HostServices,
    group: &SymbolGroup,
    is_primary: bool,
    include_hidden_locations: bool,
    options: &FindReferencesSearchOptions,
    cancel: &CancellationToken,
) -> Result<DefinitionItem> {
    let all_locations = group.all_locations();
    to_definition_item(
        host,
        group.primary(),
        &all_locations,
        is_primary,
        include_hidden_locations,
        true,
        options,
        cancel,
    )
    .await
}

/// Build a definition item without classifying its spans.
pub async fn to_non_classified_definition_item(
    host: &HostServices,
    definition: &Arc<Symbol>,
    include_hidden_locations: bool,
    cancel: &CancellationToken,
) -> Result<DefinitionItem> {
    let options = FindReferencesSearchOptions::default().with_unidirectional_hierarchy_cascade(true);
    to_definition_item(
        host,
        definition,
        &definition.locations,
        false,
        include_hidden_locations,
        false,
        &options,
        cancel,
    )
    .await
}

/// Blocking form of [`to_non_classified_definition_item`].
///
/// Without classification nothing in the construction suspends, so driving
/// the future to completion on the calling thread is safe.
pub fn to_non_classified_definition_item_blocking(
    host: &HostServices,
    definition: &Arc<Symbol>,
    include_hidden_locations: bool,
) -> Result<DefinitionItem> {
    futures::executor::block_on(to_definition_item(
        host,
        definition,
        &definition.locations,
        false,
        include_hidden_locations,
        false,
        &FindReferencesSearchOptions::default(),
        &CancellationToken::new(),
    ))
}

/// Build the definition item for `definition` over `locations`.
///
/// Either returns a complete item or an error; cancellation is observed
/// before construction and between locations.
#[allow(clippy::too_many_arguments)]
pub async fn to_definition_item(
    host: &HostServices,
    definition: &Arc<Symbol>,
    locations: &[Location],
    is_primary: bool,
    include_hidden_locations: bool,
    include_classified_spans: bool,
    options: &FindReferencesSearchOptions,
    cancel: &CancellationToken,
) -> Result<DefinitionItem> {
    check_cancelled(cancel)?;

    // Items are built for the unsubstituted definition (`List<T>`, not
    // `List<int>`). Tuple fields are the exception: they are shown as
    // definitions in their own right.
    let definition = if definition.is_tuple_field() {
        Arc::clone(definition)
    } else {
        original_definition(definition)
    };

    let display_parts = host.display.display_parts(&definition);
    let name_display_parts = host.display.name_display_parts(&definition);
    let tags = GlyphTags::for_glyph(host.glyphs.glyph(&definition));
    let display_if_no_references =
        host.policy
            .should_show_with_no_reference_locations(&definition, options, false);
    let properties = definition_properties(host, &definition, is_primary);

    let mut source_locations = Vec::new();
    if enumerates_locations(definition.kind) {
        for location in locations {
            match location {
                Location::InMetadata(metadata) => {
                    trace!(
                        "[FIND_USAGES] {} resolved to metadata module {}",
                        definition.name,
                        metadata.module
                    );
                    return Ok(DefinitionItem::create_metadata_definition(
                        tags,
                        display_parts,
                        name_display_parts,
                        Arc::clone(&metadata.module),
                        Arc::clone(&definition),
                        properties,
                        display_if_no_references,
                    ));
                }
                Location::InSource(source) => {
                    if !source.passes_filter(include_hidden_locations) {
                        continue;
                    }

                    let Some(document) = host.documents.document(source.file) else {
                        debug!(
                            "[FIND_USAGES] dropping location of {}: {} is not loaded",
                            definition.name, source.file
                        );
                        continue;
                    };

                    let span = if include_classified_spans {
                        check_cancelled(cancel)?;
                        let classified = host.classifier.classify(&document, source.range, cancel).await?;
                        DocumentSpan::with_classification(document, source.range, classified)
                    } else {
                        DocumentSpan::new(document, source.range)
                    };
                    source_locations.push(span);
                }
                Location::None => {}
            }
        }
    }

    if source_locations.is_empty() {
        // Nothing to navigate to; show a sentinel that explains where the
        // definition comes from instead.
        return Ok(DefinitionItem::create_non_navigable_item(
            tags,
            display_parts,
            origination_parts(&definition),
            properties,
            display_if_no_references,
        ));
    }

    let displayable_properties = host.properties.additional_find_usages_properties(&definition);
    debug!(
        "[FIND_USAGES] definition {} with {} location(s)",
        definition.name,
        source_locations.len()
    );

    Ok(DefinitionItem::create(
        tags,
        display_parts,
        source_locations,
        name_display_parts,
        properties,
        displayable_properties,
        display_if_no_references,
    ))
}

/// Build the reference item for one raw search hit.
///
/// Returns `Ok(None)` when the hit is in a hidden region and hidden locations
/// were not requested. A hit outside of source is a caller error.
pub async fn try_create_source_reference_item(
    host: &HostServices,
    reference: &ReferenceLocation,
    definition: &Arc<DefinitionItem>,
    include_hidden_locations: bool,
    cancel: &CancellationToken,
) -> Result<Option<SourceReferenceItem>> {
    let Location::InSource(source) = &reference.location else {
        warn!(
            "[FIND_USAGES] reference in {} is not a source location: {:?}",
            reference.document.path(),
            reference.location
        );
        return Err(FindUsagesError::NotInSource);
    };

    if !source.passes_filter(include_hidden_locations) {
        return Ok(None);
    }

    check_cancelled(cancel)?;
    let classified = host
        .classifier
        .classify(&reference.document, source.range, cancel)
        .await?;
    let span = DocumentSpan::with_classification(Arc::clone(&reference.document), source.range, classified);

    Ok(Some(SourceReferenceItem::new(
        Arc::clone(definition),
        span,
        reference.usage,
        reference.additional_properties.clone(),
    )))
}

/// Ask the host's extension layers for an extra item to show next to
/// `definition`.
pub async fn third_party_definition_item(
    host: &HostServices,
    definition: &DefinitionItem,
    cancel: &CancellationToken,
) -> Result<Option<DefinitionItem>> {
    check_cancelled(cancel)?;
    let item = host
        .definitions_factory
        .third_party_definition_item(host.documents.as_ref(), definition, cancel)
        .await?;
    if item.is_some() {
        trace!(
            "[FIND_USAGES] extension contributed a definition for {}",
            definition.classified_text()
        );
    }
    Ok(item)
}

/// Namespaces come from many declarations but are shown as a single root
/// node, so their locations are never enumerated.
fn enumerates_locations(kind: SymbolKind) -> bool {
    match kind {
        SymbolKind::Namespace => false,
        SymbolKind::Type(_)
        | SymbolKind::Method(_)
        | SymbolKind::Property
        | SymbolKind::Field(_)
        | SymbolKind::Event
        | SymbolKind::Parameter
        | SymbolKind::Local
        | SymbolKind::TypeParameter => true,
    }
}

fn definition_properties(host: &HostServices, definition: &Symbol, is_primary: bool) -> DefinitionProperties {
    let rq_name_key1 = host.names.rq_name(definition);

    // Constructors also carry their type's name so consumers can navigate
    // to the type instead.
    let rq_name_key2 = if definition.is_constructor() {
        definition
            .containing_type()
            .and_then(|ty| host.names.rq_name(ty))
    } else {
        None
    };

    DefinitionProperties {
        primary: is_primary,
        rq_name_key1,
        rq_name_key2,
    }
}

fn origination_parts(definition: &Symbol) -> Vec<TaggedText> {
    definition
        .module
        .as_ref()
        .map(|module| vec![TaggedText::new(TextTag::Assembly, module.as_ref())])
        .unwrap_or_default()
}
