//! IDE request handlers for find-usages.
//!
//! This module is the boundary between the find-usages pipeline and a
//! language server. Each handler corresponds to one protocol request.
//!
//! ## Design Principles
//!
//! 1. **No transport types**: Uses our own types, converted at the server boundary
//! 2. **One sink per request**: Results are collected, then converted once
//! 3. **Snapshot-based**: Locations are resolved against the request's solution
//!
//! ## Usage
//!
//! ```ignore
//! use refscope::ide::{FindImplementationsHandler, RequestContext, RequestHandler};
//!
//! let handler = FindImplementationsHandler::new(service);
//! let context = RequestContext::new(Arc::new(solution), ClientCapabilities::default());
//! let locations = handler
//!     .handle(TextDocumentPositionParams::new(file, 3, 10), &context, &cancel)
//!     .await?;
//! ```

mod handlers;
mod protocol;

pub use handlers::{
    FindImplementationsHandler, FindReferencesHandler, RequestHandler, TEXT_DOCUMENT_IMPLEMENTATION,
    TEXT_DOCUMENT_REFERENCES,
};
pub use protocol::{
    ClientCapabilities, ProtocolLocation, ReferenceParams, RequestContext, TextDocumentPositionParams,
    document_span_to_location, document_span_to_location_with_text,
};
