//! Reference item construction tests.

use std::sync::Arc;

use refscope::error::FindUsagesError;
use refscope::find_usages::{
    DefinitionItem, FindReferencesSearchOptions, ReferenceLocation, SymbolUsageInfo, ValueUsage,
    to_classified_definition_item, try_create_source_reference_item,
};
use refscope::symbols::{FieldKind, Location, Symbol, SymbolKind};
use tokio_util::sync::CancellationToken;

use crate::helpers::test_host::{TestHost, range_of};

const COUNTER_SOURCE: &str = "class Counter\n{\n  int count;\n  void Bump() { count = count + 1; }\n}\n";

async fn count_definition(test_host: &TestHost) -> Arc<DefinitionItem> {
    let count = Symbol::new("count", SymbolKind::Field(FieldKind::Ordinary)).into_arc();
    Arc::new(
        to_classified_definition_item(
            &test_host.services(),
            &count,
            true,
            false,
            &FindReferencesSearchOptions::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap(),
    )
}

#[tokio::test]
async fn test_reference_carries_usage_and_line_text() {
    let mut test_host = TestHost::new();
    let file = test_host.add_document("Counter.cs", COUNTER_SOURCE);
    let definition = count_definition(&test_host).await;
    let reference = ReferenceLocation::new(
        test_host.document(file),
        Location::source(file, range_of(COUNTER_SOURCE, "count", 1)),
    )
    .with_usage(SymbolUsageInfo::Value(ValueUsage::Write))
    .with_property("Kind", "assignment");

    let item = try_create_source_reference_item(
        &test_host.services(),
        &reference,
        &definition,
        false,
        &CancellationToken::new(),
    )
    .await
    .unwrap()
    .expect("visible reference should produce an item");

    assert!(Arc::ptr_eq(item.definition(), &definition));
    assert!(item.usage().is_write());
    assert_eq!(item.additional_properties().get("Kind").map(String::as_str), Some("assignment"));
    assert_eq!(item.span().classified_text(), Some("  void Bump() { count = count + 1; }"));
}

#[tokio::test]
async fn test_hidden_reference_is_skipped_unless_requested() {
    let mut test_host = TestHost::new();
    let file = test_host.add_document("Counter.cs", COUNTER_SOURCE);
    let definition = count_definition(&test_host).await;
    let reference = ReferenceLocation::new(
        test_host.document(file),
        Location::hidden(file, range_of(COUNTER_SOURCE, "count", 2)),
    );
    let host = test_host.services();
    let token = CancellationToken::new();

    let skipped = try_create_source_reference_item(&host, &reference, &definition, false, &token)
        .await
        .unwrap();
    let included = try_create_source_reference_item(&host, &reference, &definition, true, &token)
        .await
        .unwrap();

    assert!(skipped.is_none());
    assert!(included.is_some());
}

#[tokio::test]
async fn test_metadata_reference_is_rejected() {
    let mut test_host = TestHost::new();
    let file = test_host.add_document("Counter.cs", COUNTER_SOURCE);
    let definition = count_definition(&test_host).await;
    let reference = ReferenceLocation::new(test_host.document(file), Location::metadata("mscorlib"));

    let result = try_create_source_reference_item(
        &test_host.services(),
        &reference,
        &definition,
        true,
        &CancellationToken::new(),
    )
    .await;

    assert_eq!(result, Err(FindUsagesError::NotInSource));
}

#[tokio::test]
async fn test_cancelled_reference_construction() {
    let mut test_host = TestHost::new();
    let file = test_host.add_document("Counter.cs", COUNTER_SOURCE);
    let definition = count_definition(&test_host).await;
    let reference = ReferenceLocation::new(
        test_host.document(file),
        Location::source(file, range_of(COUNTER_SOURCE, "count", 1)),
    );
    let token = CancellationToken::new();
    token.cancel();

    let result = try_create_source_reference_item(&test_host.services(), &reference, &definition, false, &token).await;

    assert_eq!(result, Err(FindUsagesError::Cancelled));
}
