//! Protocol-facing request and result types.
//!
//! These are our own types; conversion to a transport's wire types happens
//! at the server boundary.

use std::sync::Arc;

use tracing::trace;

use crate::base::{FileId, LineCol, Span};
use crate::find_usages::DocumentSpan;
use crate::host::DocumentResolver;

/// A location handed back to the client.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtocolLocation {
    pub uri: String,
    pub range: Span,
    /// Preview text for clients that can render it.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub text: Option<String>,
}

/// A position in a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextDocumentPositionParams {
    pub file: FileId,
    pub position: LineCol,
}

impl TextDocumentPositionParams {
    pub fn new(file: FileId, line: u32, col: u32) -> Self {
        Self {
            file,
            position: LineCol::new(line, col),
        }
    }
}

/// Parameters of a find-references request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReferenceParams {
    pub text_document_position: TextDocumentPositionParams,
    /// Also return the definitions of the symbol.
    pub include_declaration: bool,
}

/// What the connected client supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientCapabilities {
    /// The client renders preview text alongside locations.
    pub rich_location_text: bool,
}

/// Per-request state shared by all handlers.
#[derive(Clone)]
pub struct RequestContext {
    pub solution: Arc<dyn DocumentResolver>,
    pub client_capabilities: ClientCapabilities,
}

impl RequestContext {
    pub fn new(solution: Arc<dyn DocumentResolver>, client_capabilities: ClientCapabilities) -> Self {
        Self {
            solution,
            client_capabilities,
        }
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("client_capabilities", &self.client_capabilities)
            .finish_non_exhaustive()
    }
}

/// Convert a span to a location against the current solution.
///
/// The document is looked up again; `None` if it is gone or the span no
/// longer fits in it.
pub fn document_span_to_location(span: &DocumentSpan, solution: &dyn DocumentResolver) -> Option<ProtocolLocation> {
    let Some(document) = solution.document(span.file()) else {
        trace!("[IDE] {} is no longer in the solution", span.file());
        return None;
    };
    let range = document.span_of(span.range)?;
    Some(ProtocolLocation {
        uri: document.uri(),
        range,
        text: None,
    })
}

/// Convert a span to a location carrying preview `text`.
///
/// Uses the snapshot the span was computed against.
pub fn document_span_to_location_with_text(span: &DocumentSpan, text: Option<String>) -> Option<ProtocolLocation> {
    let range = span.document.span_of(span.range)?;
    Some(ProtocolLocation {
        uri: span.document.uri(),
        range,
        text,
    })
}
