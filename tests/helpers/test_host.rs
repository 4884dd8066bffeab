//! Test-owned host and scripted search engine.
//!
//! Every test builds its own `TestHost`; nothing is shared between tests.

use std::sync::Arc;

use async_trait::async_trait;
use refscope::base::{FileId, TextRange, TextSize};
use refscope::error::{FindUsagesError, Result};
use refscope::find_usages::{
    FindUsagesContext, FindUsagesOptions, FindUsagesService, ReferenceLocation, third_party_definition_item,
    to_classified_definition_item, try_create_source_reference_item,
};
use refscope::host::HostServices;
use refscope::ide::{ClientCapabilities, RequestContext};
use refscope::symbols::Symbol;
use refscope::workspace::{Document, Solution};
use tokio_util::sync::CancellationToken;

/// A solution plus the default host services over it.
#[derive(Default)]
pub struct TestHost {
    solution: Solution,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, path: &str, text: &str) -> FileId {
        self.solution.set_document(path, text)
    }

    pub fn remove_document(&mut self, file: FileId) {
        self.solution.remove_document(file);
    }

    pub fn document(&self, file: FileId) -> Arc<Document> {
        self.solution.document(file).expect("document should be loaded")
    }

    pub fn solution(&self) -> Arc<Solution> {
        Arc::new(self.solution.clone())
    }

    pub fn services(&self) -> HostServices {
        HostServices::with_defaults(self.solution())
    }

    pub fn request_context(&self, rich_location_text: bool) -> RequestContext {
        RequestContext::new(self.solution(), ClientCapabilities { rich_location_text })
    }
}

/// Range of the `nth` (0-based) occurrence of `needle` in `text`.
pub fn range_of(text: &str, needle: &str, nth: usize) -> TextRange {
    let start = text
        .match_indices(needle)
        .nth(nth)
        .map(|(index, _)| index)
        .expect("needle should occur in text");
    TextRange::at(TextSize::from(start as u32), TextSize::of(needle))
}

/// One reference the scripted search reports, bound to a definition by index.
pub struct ScriptedReference {
    pub definition: usize,
    pub location: ReferenceLocation,
}

/// A search engine that reports a fixed set of results.
///
/// Items are built through the real factory functions, so the options the
/// handler passes in apply to them.
pub struct ScriptedSearch {
    host: HostServices,
    definitions: Vec<Arc<Symbol>>,
    references: Vec<ScriptedReference>,
    failure: Option<FindUsagesError>,
    message: Option<String>,
}

impl ScriptedSearch {
    pub fn new(host: HostServices) -> Self {
        Self {
            host,
            definitions: Vec::new(),
            references: Vec::new(),
            failure: None,
            message: None,
        }
    }

    pub fn with_definition(mut self, symbol: Arc<Symbol>) -> Self {
        self.definitions.push(symbol);
        self
    }

    pub fn with_reference(mut self, definition: usize, location: ReferenceLocation) -> Self {
        self.references.push(ScriptedReference { definition, location });
        self
    }

    /// Report the definitions, then fail.
    pub fn failing_with(mut self, error: FindUsagesError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    async fn run(
        &self,
        options: &FindUsagesOptions,
        context: &dyn FindUsagesContext,
        cancel: &CancellationToken,
        with_references: bool,
    ) -> Result<()> {
        if let Some(message) = &self.message {
            context.report_message(message, cancel).await?;
        }

        let mut items = Vec::new();
        for (index, symbol) in self.definitions.iter().enumerate() {
            let item = Arc::new(
                to_classified_definition_item(
                    &self.host,
                    symbol,
                    index == 0,
                    options.include_hidden_locations,
                    &options.search,
                    cancel,
                )
                .await?,
            );
            context.on_definition_found(Arc::clone(&item), cancel).await?;
            if let Some(extra) = third_party_definition_item(&self.host, &item, cancel).await? {
                context.on_definition_found(Arc::new(extra), cancel).await?;
            }
            items.push(item);
        }

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        if with_references {
            for reference in &self.references {
                let definition = &items[reference.definition];
                if let Some(item) = try_create_source_reference_item(
                    &self.host,
                    &reference.location,
                    definition,
                    options.include_hidden_locations,
                    cancel,
                )
                .await?
                {
                    context.on_reference_found(item, cancel).await?;
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl FindUsagesService for ScriptedSearch {
    async fn find_references(
        &self,
        _document: &Arc<Document>,
        _position: TextSize,
        options: &FindUsagesOptions,
        context: &dyn FindUsagesContext,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.run(options, context, cancel, true).await
    }

    async fn find_implementations(
        &self,
        _document: &Arc<Document>,
        _position: TextSize,
        options: &FindUsagesOptions,
        context: &dyn FindUsagesContext,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.run(options, context, cancel, false).await
    }
}

/// A search that cancels its own token before returning successfully.
pub struct CancellingSearch {
    pub inner: ScriptedSearch,
    pub token: CancellationToken,
}

#[async_trait]
impl FindUsagesService for CancellingSearch {
    async fn find_references(
        &self,
        document: &Arc<Document>,
        position: TextSize,
        options: &FindUsagesOptions,
        context: &dyn FindUsagesContext,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.inner
            .find_references(document, position, options, context, cancel)
            .await?;
        self.token.cancel();
        Ok(())
    }

    async fn find_implementations(
        &self,
        document: &Arc<Document>,
        position: TextSize,
        options: &FindUsagesOptions,
        context: &dyn FindUsagesContext,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.inner
            .find_implementations(document, position, options, context, cancel)
            .await?;
        self.token.cancel();
        Ok(())
    }
}
