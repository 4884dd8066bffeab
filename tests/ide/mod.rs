//! IDE request handler tests
//!
//! Tests for:
//! - Find implementations
//! - Find references

pub mod tests_find_implementations;
pub mod tests_find_references;
