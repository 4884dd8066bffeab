//! The surface a search engine reports its results to.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

use super::{DefinitionItem, SourceReferenceItem};

/// Receives results as a search discovers them.
///
/// Engines may call these methods any number of times, interleaved, from
/// several tasks at once.
#[async_trait]
pub trait FindUsagesContext: Send + Sync {
    async fn on_definition_found(&self, definition: Arc<DefinitionItem>, cancel: &CancellationToken) -> Result<()>;

    async fn on_reference_found(&self, reference: SourceReferenceItem, cancel: &CancellationToken) -> Result<()>;

    /// A message to show instead of (or alongside) results.
    async fn report_message(&self, message: &str, cancel: &CancellationToken) -> Result<()>;

    async fn set_search_title(&self, title: &str, cancel: &CancellationToken) -> Result<()>;

    async fn report_progress(&self, _current: usize, _maximum: usize, _cancel: &CancellationToken) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct State {
    definitions: Vec<Arc<DefinitionItem>>,
    references: Vec<SourceReferenceItem>,
    message: Option<String>,
    search_title: Option<String>,
    progress: Option<(usize, usize)>,
}

/// Aggregates results for consumers that only want them once the search has
/// finished.
///
/// Append-only: items keep their discovery order and are never removed.
/// One lock guards all state; it is never held across an `.await`.
#[derive(Debug, Default)]
pub struct SimpleFindUsagesContext {
    state: Mutex<State>,
}

impl SimpleFindUsagesContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the definitions found so far, in discovery order.
    pub fn definitions(&self) -> Vec<Arc<DefinitionItem>> {
        self.state.lock().definitions.clone()
    }

    /// Snapshot of the references found so far, in discovery order.
    pub fn references(&self) -> Vec<SourceReferenceItem> {
        self.state.lock().references.clone()
    }

    pub fn message(&self) -> Option<String> {
        self.state.lock().message.clone()
    }

    pub fn search_title(&self) -> Option<String> {
        self.state.lock().search_title.clone()
    }

    /// Last `(current, maximum)` progress report.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.state.lock().progress
    }

    fn set_once(slot: &mut Option<String>, value: &str, name: &str) {
        match slot {
            Some(existing) => tracing::trace!(
                "[FIND_USAGES] ignoring second {} {:?}, keeping {:?}",
                name,
                value,
                existing
            ),
            None => *slot = Some(value.to_string()),
        }
    }
}

#[async_trait]
impl FindUsagesContext for SimpleFindUsagesContext {
    async fn on_definition_found(&self, definition: Arc<DefinitionItem>, _cancel: &CancellationToken) -> Result<()> {
        self.state.lock().definitions.push(definition);
        Ok(())
    }

    async fn on_reference_found(&self, reference: SourceReferenceItem, _cancel: &CancellationToken) -> Result<()> {
        self.state.lock().references.push(reference);
        Ok(())
    }

    async fn report_message(&self, message: &str, _cancel: &CancellationToken) -> Result<()> {
        Self::set_once(&mut self.state.lock().message, message, "message");
        Ok(())
    }

    async fn set_search_title(&self, title: &str, _cancel: &CancellationToken) -> Result<()> {
        Self::set_once(&mut self.state.lock().search_title, title, "search title");
        Ok(())
    }

    async fn report_progress(&self, current: usize, maximum: usize, _cancel: &CancellationToken) -> Result<()> {
        self.state.lock().progress = Some((current, maximum));
        Ok(())
    }
}
