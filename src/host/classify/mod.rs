//! Classified spans for result previews.
//!
//! A classified span pairs the text around a result (its whole line) with
//! syntax-highlighting runs and marks which part of the line is the result
//! itself.

mod lexer;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::base::TextRange;
use crate::error::{Result, check_cancelled};
use crate::workspace::Document;

use super::Classifier;

/// Syntax classification of one run of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassificationKind {
    Keyword,
    Identifier,
    Operator,
    Punctuation,
    NumericLiteral,
    StringLiteral,
    Comment,
    Whitespace,
    Text,
}

/// One classified run. The range is absolute within the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClassifiedSpan {
    pub range: TextRange,
    pub kind: ClassificationKind,
}

/// Classification runs covering some context around a span, plus the
/// highlighted span itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassifiedSpans {
    pub spans: Vec<ClassifiedSpan>,
    /// The span the result refers to, absolute within the document.
    pub highlight: TextRange,
}

impl ClassifiedSpans {
    /// Range covered by all runs.
    pub fn covered_range(&self) -> Option<TextRange> {
        let first = self.spans.first()?;
        let last = self.spans.last()?;
        Some(TextRange::new(first.range.start(), last.range.end()))
    }

    /// Render the runs against the document they were computed for.
    pub fn text<'a>(&self, document: &'a Document) -> Option<&'a str> {
        document.slice(self.covered_range()?)
    }

    /// Highlight relative to the start of the covered text.
    pub fn relative_highlight(&self) -> Option<TextRange> {
        let covered = self.covered_range()?;
        self.highlight
            .checked_sub(covered.start())
            .filter(|range| range.end() <= covered.len())
    }
}

/// Classifies the line containing each span with a lexer.
///
/// Spans that cross lines are classified over every line they touch.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalClassifier;

#[async_trait]
impl Classifier for LexicalClassifier {
    async fn classify(
        &self,
        document: &Document,
        range: TextRange,
        cancel: &CancellationToken,
    ) -> Result<ClassifiedSpans> {
        check_cancelled(cancel)?;

        let context = match (
            document.line_text_at(range.start()),
            document.line_text_at(range.end()),
        ) {
            (Some((first, _)), Some((last, _))) => first.cover(last),
            // The span is past the end of the document; classify nothing
            // but keep the highlight so callers still see the span.
            _ => {
                return Ok(ClassifiedSpans {
                    spans: Vec::new(),
                    highlight: range,
                });
            }
        };

        let text = document.slice(context).unwrap_or_default();
        let spans = lexer::classify_text(text, context.start())
            .into_iter()
            .map(|(range, kind)| ClassifiedSpan { range, kind })
            .collect();

        Ok(ClassifiedSpans {
            spans,
            highlight: range,
        })
    }
}
