use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::base::TextSize;
use crate::error::Result;
use crate::workspace::Document;

use super::{FindUsagesContext, FindUsagesOptions};

/// The symbol search engine.
///
/// Implementations find the symbol at `position`, search for its usages and
/// push every result into `context` before returning. They may do so from
/// any number of concurrent tasks.
#[async_trait]
pub trait FindUsagesService: Send + Sync {
    /// Find the references for the symbol at `position` in `document`.
    async fn find_references(
        &self,
        document: &Arc<Document>,
        position: TextSize,
        options: &FindUsagesOptions,
        context: &dyn FindUsagesContext,
        cancel: &CancellationToken,
    ) -> Result<()>;

    /// Find the implementations for the symbol at `position` in `document`.
    async fn find_implementations(
        &self,
        document: &Arc<Document>,
        position: TextSize,
        options: &FindUsagesOptions,
        context: &dyn FindUsagesContext,
        cancel: &CancellationToken,
    ) -> Result<()>;
}
