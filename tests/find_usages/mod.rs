//! Find-usages item construction and result sink tests
//!
//! Tests for:
//! - Definition items (metadata, namespaces, sentinels, groups, properties)
//! - Reference items
//! - Concurrent result collection

pub mod tests_reference_items;
