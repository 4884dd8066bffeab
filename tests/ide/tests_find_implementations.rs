//! Find implementations handler tests.

use std::sync::Arc;

use async_trait::async_trait;
use refscope::error::{FindUsagesError, Result};
use refscope::find_usages::{
    DefinitionItem, DefinitionProperties, DisplayableProperties, DocumentSpan, FindUsagesOptions,
};
use refscope::host::{DefinitionsAndReferencesFactory, DocumentResolver, Glyph, GlyphTags, TaggedText, TextTag};
use refscope::ide::{FindImplementationsHandler, RequestHandler, TextDocumentPositionParams};
use refscope::symbols::{Location, MethodKind, Symbol, SymbolKind, TypeKind};
use refscope::{FileId, Span};
use rstest::rstest;
use tokio_util::sync::CancellationToken;

use crate::helpers::test_host::{CancellingSearch, ScriptedSearch, TestHost, range_of};

const SHAPES_SOURCE: &str = "interface IShape\n{\n  double Area();\n}\nclass Circle : IShape\n{\n  public double Area() => 0;\n}\n";
const SQUARE_SOURCE: &str = "class Square : IShape\n{\n  public double Area() => 1;\n}\n";

struct Fixture {
    test_host: TestHost,
    shapes: FileId,
    square: FileId,
}

impl Fixture {
    fn new() -> Self {
        let mut test_host = TestHost::new();
        let shapes = test_host.add_document("Shapes.cs", SHAPES_SOURCE);
        let square = test_host.add_document("Generated/Square.g.cs", SQUARE_SOURCE);
        Self {
            test_host,
            shapes,
            square,
        }
    }

    /// `Circle.Area` (visible) and `Square.Area` (hidden).
    fn implementations(&self) -> (Arc<Symbol>, Arc<Symbol>) {
        let circle = Symbol::new("Circle", SymbolKind::Type(TypeKind::Class)).into_arc();
        let square = Symbol::new("Square", SymbolKind::Type(TypeKind::Class)).into_arc();
        let circle_area = Symbol::new("Area", SymbolKind::Method(MethodKind::Ordinary))
            .with_container(circle)
            .with_location(Location::source(self.shapes, range_of(SHAPES_SOURCE, "Area", 1)))
            .into_arc();
        let square_area = Symbol::new("Area", SymbolKind::Method(MethodKind::Ordinary))
            .with_container(square)
            .with_location(Location::hidden(self.square, range_of(SQUARE_SOURCE, "Area", 0)))
            .into_arc();
        (circle_area, square_area)
    }

    fn search(&self) -> ScriptedSearch {
        let (circle_area, square_area) = self.implementations();
        ScriptedSearch::new(self.test_host.services())
            .with_definition(circle_area)
            .with_definition(square_area)
    }

    /// Position of `Area` in the interface declaration.
    fn params(&self) -> TextDocumentPositionParams {
        TextDocumentPositionParams::new(self.shapes, 2, 9)
    }
}

// =============================================================================
// FIND IMPLEMENTATIONS - RESULTS
// =============================================================================

#[rstest]
#[case::hidden_excluded(false, 1)]
#[case::hidden_included(true, 2)]
#[tokio::test]
async fn test_hidden_implementations_follow_options(#[case] include_hidden: bool, #[case] expected: usize) {
    let fixture = Fixture::new();
    let handler = FindImplementationsHandler::new(Arc::new(fixture.search()))
        .with_options(FindUsagesOptions::default().with_hidden_locations(include_hidden));

    let locations = handler
        .handle(
            fixture.params(),
            &fixture.test_host.request_context(false),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(locations.len(), expected);
    assert_eq!(locations[0].uri, "file:///Shapes.cs");
    assert_eq!(locations[0].range, Span::from_coords(6, 16, 6, 20));
}

#[tokio::test]
async fn test_plain_client_gets_no_text() {
    let fixture = Fixture::new();
    let handler = FindImplementationsHandler::new(Arc::new(fixture.search()));

    let locations = handler
        .handle(
            fixture.params(),
            &fixture.test_host.request_context(false),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(locations.iter().all(|location| location.text.is_none()));
}

#[tokio::test]
async fn test_rich_client_gets_definition_text() {
    let fixture = Fixture::new();
    let handler = FindImplementationsHandler::new(Arc::new(fixture.search()));

    let locations = handler
        .handle(
            fixture.params(),
            &fixture.test_host.request_context(true),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].text.as_deref(), Some("Circle.Area()"));
}

#[tokio::test]
async fn test_metadata_implementation_has_no_location() {
    let fixture = Fixture::new();
    let external = Symbol::new("Area", SymbolKind::Method(MethodKind::Ordinary))
        .with_location(Location::metadata("Geometry"))
        .into_arc();
    let search = fixture.search().with_definition(external);
    let handler = FindImplementationsHandler::new(Arc::new(search));

    let locations = handler
        .handle(
            fixture.params(),
            &fixture.test_host.request_context(false),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(locations.len(), 1);
}

#[tokio::test]
async fn test_document_removed_after_search_snapshot_is_dropped() {
    let mut fixture = Fixture::new();
    // The search sees the document, the request's solution no longer does.
    let search = fixture.search();
    fixture.test_host.remove_document(fixture.square);
    let handler = FindImplementationsHandler::new(Arc::new(search))
        .with_options(FindUsagesOptions::default().with_hidden_locations(true));

    let locations = handler
        .handle(
            fixture.params(),
            &fixture.test_host.request_context(false),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].uri, "file:///Shapes.cs");
}

/// Links `Circle.Area` to the generated `Square.Area` body.
struct LinkedSquareDefinitions {
    square: FileId,
}

#[async_trait]
impl DefinitionsAndReferencesFactory for LinkedSquareDefinitions {
    async fn third_party_definition_item(
        &self,
        solution: &dyn DocumentResolver,
        definition: &DefinitionItem,
        _cancel: &CancellationToken,
    ) -> Result<Option<DefinitionItem>> {
        if definition.classified_text() != "Circle.Area()" {
            return Ok(None);
        }
        let Some(document) = solution.document(self.square) else {
            return Ok(None);
        };
        let span = DocumentSpan::new(document, range_of(SQUARE_SOURCE, "Area", 0));
        Ok(Some(DefinitionItem::create(
            GlyphTags::for_glyph(Glyph::Method),
            vec![TaggedText::new(TextTag::Text, "Square.Area (linked)")],
            vec![span],
            Vec::new(),
            DefinitionProperties::default(),
            DisplayableProperties::new(),
            false,
        )))
    }
}

#[tokio::test]
async fn test_extension_contributed_definition_is_reported() {
    let fixture = Fixture::new();
    let (circle_area, square_area) = fixture.implementations();
    let host = fixture
        .test_host
        .services()
        .with_definitions_factory(Arc::new(LinkedSquareDefinitions { square: fixture.square }));
    let search = ScriptedSearch::new(host)
        .with_definition(circle_area)
        .with_definition(square_area);
    let handler = FindImplementationsHandler::new(Arc::new(search));

    let locations = handler
        .handle(
            fixture.params(),
            &fixture.test_host.request_context(true),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let found: Vec<_> = locations
        .iter()
        .map(|location| (location.uri.as_str(), location.text.as_deref()))
        .collect();
    assert_eq!(
        found,
        vec![
            ("file:///Shapes.cs", Some("Circle.Area()")),
            ("file:///Generated/Square.g.cs", Some("Square.Area (linked)")),
        ]
    );
}

// =============================================================================
// FIND IMPLEMENTATIONS - FAILURES
// =============================================================================

#[tokio::test]
async fn test_missing_document_fails() {
    let fixture = Fixture::new();
    let handler = FindImplementationsHandler::new(Arc::new(fixture.search()));

    let result = handler
        .handle(
            TextDocumentPositionParams::new(FileId::new(77), 0, 0),
            &fixture.test_host.request_context(false),
            &CancellationToken::new(),
        )
        .await;

    assert_eq!(result, Err(FindUsagesError::DocumentNotFound(FileId::new(77))));
}

#[tokio::test]
async fn test_invalid_position_fails() {
    let fixture = Fixture::new();
    let handler = FindImplementationsHandler::new(Arc::new(fixture.search()));

    let result = handler
        .handle(
            TextDocumentPositionParams::new(fixture.shapes, 40, 0),
            &fixture.test_host.request_context(false),
            &CancellationToken::new(),
        )
        .await;

    assert_eq!(result, Err(FindUsagesError::InvalidPosition { line: 40, col: 0 }));
}

#[rstest]
#[case::max_column(u32::MAX)]
#[case::wrapping_column(u32::MAX - 1)]
#[tokio::test]
async fn test_huge_column_is_invalid_position(#[case] col: u32) {
    let fixture = Fixture::new();
    let handler = FindImplementationsHandler::new(Arc::new(fixture.search()));

    let result = handler
        .handle(
            TextDocumentPositionParams::new(fixture.shapes, 2, col),
            &fixture.test_host.request_context(false),
            &CancellationToken::new(),
        )
        .await;

    assert_eq!(result, Err(FindUsagesError::InvalidPosition { line: 2, col }));
}

#[tokio::test]
async fn test_search_failure_propagates() {
    let fixture = Fixture::new();
    let search = fixture
        .search()
        .failing_with(FindUsagesError::external("search", "index unavailable"));
    let handler = FindImplementationsHandler::new(Arc::new(search));

    let result = handler
        .handle(
            fixture.params(),
            &fixture.test_host.request_context(false),
            &CancellationToken::new(),
        )
        .await;

    assert_eq!(result, Err(FindUsagesError::external("search", "index unavailable")));
}

#[tokio::test]
async fn test_cancelled_before_start() {
    let fixture = Fixture::new();
    let handler = FindImplementationsHandler::new(Arc::new(fixture.search()));
    let token = CancellationToken::new();
    token.cancel();

    let result = handler
        .handle(fixture.params(), &fixture.test_host.request_context(false), &token)
        .await;

    assert_eq!(result, Err(FindUsagesError::Cancelled));
}

#[tokio::test]
async fn test_cancelled_during_search() {
    let fixture = Fixture::new();
    let token = CancellationToken::new();
    let search = CancellingSearch {
        inner: fixture.search(),
        token: token.clone(),
    };
    let handler = FindImplementationsHandler::new(Arc::new(search));

    let result = handler
        .handle(fixture.params(), &fixture.test_host.request_context(false), &token)
        .await;

    assert!(result.unwrap_err().is_cancelled());
}
