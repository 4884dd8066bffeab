//! Find references handler tests.

use std::sync::Arc;

use refscope::find_usages::{FindUsagesOptions, ReferenceLocation, SymbolUsageInfo, ValueUsage};
use refscope::ide::{FindReferencesHandler, ReferenceParams, RequestHandler, TextDocumentPositionParams};
use refscope::symbols::{Location, MethodKind, Symbol, SymbolKind, TypeKind};
use refscope::{FileId, Span};
use rstest::rstest;
use tokio_util::sync::CancellationToken;

use crate::helpers::test_host::{ScriptedSearch, TestHost, range_of};

const LOGGER_SOURCE: &str = "class Logger\n{\n  public void Log() { }\n  void Run()\n  {\n    Log();\n    Log();\n  }\n}\n";

struct Fixture {
    test_host: TestHost,
    file: FileId,
}

impl Fixture {
    fn new() -> Self {
        let mut test_host = TestHost::new();
        let file = test_host.add_document("Logger.cs", LOGGER_SOURCE);
        Self { test_host, file }
    }

    /// `Logger.Log` with one visible and one hidden call.
    fn search(&self) -> ScriptedSearch {
        let logger = Symbol::new("Logger", SymbolKind::Type(TypeKind::Class)).into_arc();
        let log = Symbol::new("Log", SymbolKind::Method(MethodKind::Ordinary))
            .with_container(logger)
            .with_location(Location::source(self.file, range_of(LOGGER_SOURCE, "Log", 1)))
            .into_arc();
        let document = self.test_host.document(self.file);

        ScriptedSearch::new(self.test_host.services())
            .with_definition(log)
            .with_reference(
                0,
                ReferenceLocation::new(
                    Arc::clone(&document),
                    Location::source(self.file, range_of(LOGGER_SOURCE, "Log", 2)),
                )
                .with_usage(SymbolUsageInfo::Value(ValueUsage::Name)),
            )
            .with_reference(
                0,
                ReferenceLocation::new(document, Location::hidden(self.file, range_of(LOGGER_SOURCE, "Log", 3))),
            )
            .with_message("Searching Logger.Log")
    }

    fn params(&self, include_declaration: bool) -> ReferenceParams {
        ReferenceParams {
            text_document_position: TextDocumentPositionParams::new(self.file, 5, 4),
            include_declaration,
        }
    }
}

#[rstest]
#[case::references_only(false, false, 1)]
#[case::with_declaration(true, false, 2)]
#[case::with_hidden(false, true, 2)]
#[case::with_declaration_and_hidden(true, true, 3)]
#[tokio::test]
async fn test_reference_locations(
    #[case] include_declaration: bool,
    #[case] include_hidden: bool,
    #[case] expected: usize,
) {
    let fixture = Fixture::new();
    let handler = FindReferencesHandler::new(Arc::new(fixture.search()))
        .with_options(FindUsagesOptions::default().with_hidden_locations(include_hidden));

    let locations = handler
        .handle(
            fixture.params(include_declaration),
            &fixture.test_host.request_context(false),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(locations.len(), expected);
}

#[tokio::test]
async fn test_declaration_comes_first() {
    let fixture = Fixture::new();
    let handler = FindReferencesHandler::new(Arc::new(fixture.search()));

    let locations = handler
        .handle(
            fixture.params(true),
            &fixture.test_host.request_context(false),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let ranges: Vec<_> = locations.iter().map(|location| location.range).collect();
    assert_eq!(ranges, vec![Span::from_coords(2, 14, 2, 17), Span::from_coords(5, 4, 5, 7)]);
}

#[tokio::test]
async fn test_rich_client_gets_reference_line_text() {
    let fixture = Fixture::new();
    let handler = FindReferencesHandler::new(Arc::new(fixture.search()));

    let locations = handler
        .handle(
            fixture.params(true),
            &fixture.test_host.request_context(true),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let texts: Vec<_> = locations.iter().map(|location| location.text.as_deref()).collect();
    assert_eq!(texts, vec![Some("Logger.Log()"), Some("    Log();")]);
}

#[tokio::test]
async fn test_handler_target_document() {
    let fixture = Fixture::new();
    let handler = FindReferencesHandler::new(Arc::new(fixture.search()));

    assert_eq!(handler.text_document(&fixture.params(false)), fixture.file);
    assert!(!handler.mutates_solution_state());
}
