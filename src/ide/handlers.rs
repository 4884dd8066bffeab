//! Find-implementations and find-references request handlers.
//!
//! Each handler runs one search into a fresh [`SimpleFindUsagesContext`],
//! waits for it to finish, then converts what was collected into
//! [`ProtocolLocation`]s.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::base::FileId;
use crate::error::{FindUsagesError, Result, check_cancelled};
use crate::find_usages::{
    DefinitionItem, DocumentSpan, FindUsagesOptions, FindUsagesService, SimpleFindUsagesContext, SourceReferenceItem,
};

use super::protocol::{
    ProtocolLocation, ReferenceParams, RequestContext, TextDocumentPositionParams, document_span_to_location,
    document_span_to_location_with_text,
};

pub const TEXT_DOCUMENT_IMPLEMENTATION: &str = "textDocument/implementation";
pub const TEXT_DOCUMENT_REFERENCES: &str = "textDocument/references";

/// A protocol request handler.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    type Params: Send + Sync;
    type Response: Send;

    /// Protocol method name.
    fn method(&self) -> &'static str;

    fn mutates_solution_state(&self) -> bool {
        false
    }

    fn requires_solution(&self) -> bool {
        true
    }

    /// The document the request targets.
    fn text_document(&self, params: &Self::Params) -> FileId;

    async fn handle(
        &self,
        params: Self::Params,
        context: &RequestContext,
        cancel: &CancellationToken,
    ) -> Result<Self::Response>;
}

#[derive(Clone, Copy, Debug)]
enum SearchKind {
    Implementations,
    References,
}

/// Resolve the request position and run the search to completion.
async fn collect(
    service: &dyn FindUsagesService,
    kind: SearchKind,
    options: &FindUsagesOptions,
    params: TextDocumentPositionParams,
    context: &RequestContext,
    cancel: &CancellationToken,
) -> Result<SimpleFindUsagesContext> {
    check_cancelled(cancel)?;

    let document = context
        .solution
        .document(params.file)
        .ok_or(FindUsagesError::DocumentNotFound(params.file))?;
    let position = document
        .offset_of(params.position)
        .ok_or(FindUsagesError::InvalidPosition {
            line: params.position.line,
            col: params.position.col,
        })?;

    let sink = SimpleFindUsagesContext::new();
    match kind {
        SearchKind::Implementations => {
            service
                .find_implementations(&document, position, options, &sink, cancel)
                .await?
        }
        SearchKind::References => {
            service
                .find_references(&document, position, options, &sink, cancel)
                .await?
        }
    }

    // Results of a search that finished after cancellation are not reported.
    check_cancelled(cancel)?;
    Ok(sink)
}

fn to_location(span: &DocumentSpan, rich_text: Option<String>, context: &RequestContext) -> Option<ProtocolLocation> {
    let location = if context.client_capabilities.rich_location_text {
        document_span_to_location_with_text(span, rich_text)
    } else {
        document_span_to_location(span, context.solution.as_ref())
    };
    if location.is_none() {
        trace!("[IDE] dropping unconvertible span {:?} in {}", span.range, span.file());
    }
    location
}

fn definition_locations<'a>(
    definitions: &'a [Arc<DefinitionItem>],
    context: &'a RequestContext,
) -> impl Iterator<Item = ProtocolLocation> + 'a {
    definitions.iter().flat_map(move |definition| {
        definition
            .source_spans()
            .iter()
            .filter_map(move |span| to_location(span, Some(definition.classified_text()), context))
    })
}

fn reference_locations<'a>(
    references: &'a [SourceReferenceItem],
    context: &'a RequestContext,
) -> impl Iterator<Item = ProtocolLocation> + 'a {
    references.iter().filter_map(move |reference| {
        let text = reference.span().classified_text().map(str::to_string);
        to_location(reference.span(), text, context)
    })
}

/// Handles `textDocument/implementation`.
pub struct FindImplementationsHandler {
    service: Arc<dyn FindUsagesService>,
    options: FindUsagesOptions,
}

impl FindImplementationsHandler {
    pub fn new(service: Arc<dyn FindUsagesService>) -> Self {
        Self {
            service,
            options: FindUsagesOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FindUsagesOptions) -> Self {
        self.options = options;
        self
    }
}

#[async_trait]
impl RequestHandler for FindImplementationsHandler {
    type Params = TextDocumentPositionParams;
    type Response = Vec<ProtocolLocation>;

    fn method(&self) -> &'static str {
        TEXT_DOCUMENT_IMPLEMENTATION
    }

    fn text_document(&self, params: &Self::Params) -> FileId {
        params.file
    }

    async fn handle(
        &self,
        params: Self::Params,
        context: &RequestContext,
        cancel: &CancellationToken,
    ) -> Result<Self::Response> {
        let sink = collect(
            self.service.as_ref(),
            SearchKind::Implementations,
            &self.options,
            params,
            context,
            cancel,
        )
        .await?;

        let definitions = sink.definitions();
        let locations: Vec<_> = definition_locations(&definitions, context).collect();
        debug!(
            "[IDE] {} for {}: {} definition(s), {} location(s)",
            TEXT_DOCUMENT_IMPLEMENTATION,
            params.file,
            definitions.len(),
            locations.len()
        );
        Ok(locations)
    }
}

/// Handles `textDocument/references`.
pub struct FindReferencesHandler {
    service: Arc<dyn FindUsagesService>,
    options: FindUsagesOptions,
}

impl FindReferencesHandler {
    pub fn new(service: Arc<dyn FindUsagesService>) -> Self {
        Self {
            service,
            options: FindUsagesOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FindUsagesOptions) -> Self {
        self.options = options;
        self
    }
}

#[async_trait]
impl RequestHandler for FindReferencesHandler {
    type Params = ReferenceParams;
    type Response = Vec<ProtocolLocation>;

    fn method(&self) -> &'static str {
        TEXT_DOCUMENT_REFERENCES
    }

    fn text_document(&self, params: &Self::Params) -> FileId {
        params.text_document_position.file
    }

    async fn handle(
        &self,
        params: Self::Params,
        context: &RequestContext,
        cancel: &CancellationToken,
    ) -> Result<Self::Response> {
        let sink = collect(
            self.service.as_ref(),
            SearchKind::References,
            &self.options,
            params.text_document_position,
            context,
            cancel,
        )
        .await?;

        let definitions = sink.definitions();
        let references = sink.references();
        let mut locations = Vec::new();
        if params.include_declaration {
            locations.extend(definition_locations(&definitions, context));
        }
        locations.extend(reference_locations(&references, context));

        debug!(
            "[IDE] {} for {}: {} reference(s), {} location(s)",
            TEXT_DOCUMENT_REFERENCES,
            params.text_document_position.file,
            references.len(),
            locations.len()
        );
        Ok(locations)
    }
}
