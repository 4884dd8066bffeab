//! Capabilities the host platform supplies to the find-usages pipeline.
//!
//! Each trait is one service the pipeline consumes but does not own: symbol
//! formatting, glyph mapping, classification, document lookup,
//! cross-reference names, the "show with no references" policy,
//! extension-provided display properties and extension-provided definitions. [`HostServices`] bundles one
//! implementation of each.
//!
//! Every trait has a small default implementation in this module so the
//! pipeline can run on its own:
//!
//! ```ignore
//! let mut solution = Solution::new();
//! let file = solution.set_document("a.cs", "class A {}");
//! let host = HostServices::with_defaults(Arc::new(solution));
//! ```

mod classify;
mod display;
mod glyph;
mod names;
mod policy;

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::base::{FileId, TextRange};
use crate::error::Result;
use crate::find_usages::{DefinitionItem, DisplayableProperties, FindReferencesSearchOptions};
use crate::symbols::Symbol;
use crate::workspace::Document;

pub use classify::{ClassificationKind, ClassifiedSpan, ClassifiedSpans, LexicalClassifier};
pub use display::{QualifiedNameDisplay, TaggedText, TextTag};
pub use glyph::{Glyph, GlyphTags, KindGlyphs};
pub use names::DocIdNames;
pub use policy::{
    CONTAINING_MEMBER_INFO, CONTAINING_TYPE_INFO, ContainerInfoProperties, DefaultReferencePolicy, NoThirdPartyDefinitions,
};

/// Resolves a file id to the document in the current solution snapshot.
pub trait DocumentResolver: Send + Sync {
    /// `None` if the document is not loaded in this snapshot.
    fn document(&self, file: FileId) -> Option<Arc<Document>>;
}

/// Formats symbols for display.
pub trait SymbolDisplay: Send + Sync {
    /// Full display, e.g. `class System.Collections.List<T>`.
    fn display_parts(&self, symbol: &Symbol) -> Vec<TaggedText>;

    /// Containing type and name only, e.g. `List.Add`.
    fn name_display_parts(&self, symbol: &Symbol) -> Vec<TaggedText>;
}

/// Maps symbols to the glyph shown next to them.
pub trait GlyphService: Send + Sync {
    fn glyph(&self, symbol: &Symbol) -> Glyph;
}

/// Syntax classification of document spans.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the text surrounding `range` and mark `range` as the
    /// highlighted part.
    async fn classify(
        &self,
        document: &Document,
        range: TextRange,
        cancel: &CancellationToken,
    ) -> Result<ClassifiedSpans>;
}

/// Computes opaque names that correlate a symbol across tooling layers.
pub trait CrossReferenceNames: Send + Sync {
    fn rq_name(&self, symbol: &Symbol) -> Option<String>;
}

/// Decides whether a definition is shown when it has no references.
pub trait ReferencePolicy: Send + Sync {
    fn should_show_with_no_reference_locations(
        &self,
        symbol: &Symbol,
        options: &FindReferencesSearchOptions,
        show_metadata_symbols_without_references: bool,
    ) -> bool;
}

/// Extra display-only properties contributed by reference-finder extensions.
pub trait AdditionalPropertiesProvider: Send + Sync {
    fn additional_find_usages_properties(&self, symbol: &Symbol) -> DisplayableProperties;
}

/// Lets other workspace layers contribute their own definition item for one
/// the pipeline found (e.g. a designer or a linked project system).
#[async_trait]
pub trait DefinitionsAndReferencesFactory: Send + Sync {
    /// An additional item to show next to `definition`, if this layer has one.
    async fn third_party_definition_item(
        &self,
        _solution: &dyn DocumentResolver,
        _definition: &DefinitionItem,
        _cancel: &CancellationToken,
    ) -> Result<Option<DefinitionItem>> {
        Ok(None)
    }
}

/// One implementation of every capability the pipeline consumes.
#[derive(Clone)]
pub struct HostServices {
    pub documents: Arc<dyn DocumentResolver>,
    pub display: Arc<dyn SymbolDisplay>,
    pub glyphs: Arc<dyn GlyphService>,
    pub classifier: Arc<dyn Classifier>,
    pub names: Arc<dyn CrossReferenceNames>,
    pub policy: Arc<dyn ReferencePolicy>,
    pub properties: Arc<dyn AdditionalPropertiesProvider>,
    pub definitions_factory: Arc<dyn DefinitionsAndReferencesFactory>,
}

impl HostServices {
    /// Default services over the given documents.
    pub fn with_defaults(documents: Arc<dyn DocumentResolver>) -> Self {
        Self {
            documents,
            display: Arc::new(QualifiedNameDisplay),
            glyphs: Arc::new(KindGlyphs),
            classifier: Arc::new(LexicalClassifier),
            names: Arc::new(DocIdNames),
            policy: Arc::new(DefaultReferencePolicy),
            properties: Arc::new(ContainerInfoProperties),
            definitions_factory: Arc::new(NoThirdPartyDefinitions),
        }
    }

    pub fn with_documents(mut self, documents: Arc<dyn DocumentResolver>) -> Self {
        self.documents = documents;
        self
    }

    pub fn with_display(mut self, display: Arc<dyn SymbolDisplay>) -> Self {
        self.display = display;
        self
    }

    pub fn with_glyphs(mut self, glyphs: Arc<dyn GlyphService>) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_names(mut self, names: Arc<dyn CrossReferenceNames>) -> Self {
        self.names = names;
        self
    }

    pub fn with_policy(mut self, policy: Arc<dyn ReferencePolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_properties(mut self, properties: Arc<dyn AdditionalPropertiesProvider>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_definitions_factory(mut self, factory: Arc<dyn DefinitionsAndReferencesFactory>) -> Self {
        self.definitions_factory = factory;
        self
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
