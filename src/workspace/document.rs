use std::sync::Arc;

use crate::base::{FileId, LineCol, LineIndex, Position, Span, TextRange, TextSize};

/// One document of a solution snapshot.
#[derive(Debug, PartialEq, Eq)]
pub struct Document {
    id: FileId,
    path: Arc<str>,
    text: Arc<str>,
    line_index: LineIndex,
    project: Option<Arc<str>>,
}

impl Document {
    pub fn new(id: FileId, path: &str, text: &str) -> Self {
        Self {
            id,
            path: Arc::from(path),
            text: Arc::from(text),
            line_index: LineIndex::new(text),
            project: None,
        }
    }

    pub fn with_project(mut self, project: Option<Arc<str>>) -> Self {
        self.project = project;
        self
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// URI used when handing locations in this document to a client.
    pub fn uri(&self) -> String {
        if self.path.contains("://") {
            self.path.to_string()
        } else {
            format!("file:///{}", self.path.trim_start_matches('/'))
        }
    }

    /// Text covered by `range`, if the range lies inside the document.
    pub fn slice(&self, range: TextRange) -> Option<&str> {
        self.text.get(std::ops::Range::<usize>::from(range))
    }

    pub fn contains_range(&self, range: TextRange) -> bool {
        range.end() <= TextSize::of(self.text())
    }

    /// Byte offset of a line/column position.
    pub fn offset_of(&self, position: LineCol) -> Option<TextSize> {
        self.line_index.offset(position)
    }

    /// Line/column span of a byte range. `None` if the range runs past the
    /// end of the document.
    pub fn span_of(&self, range: TextRange) -> Option<Span> {
        let start = self.line_index.line_col(range.start())?;
        let end = self.line_index.line_col(range.end())?;
        Some(Span::new(
            Position::new(start.line, start.col),
            Position::new(end.line, end.col),
        ))
    }

    /// Full text of the line that contains `offset`, without the newline.
    pub fn line_text_at(&self, offset: TextSize) -> Option<(TextRange, &str)> {
        let line = self.line_index.line_col(offset)?.line;
        let range = self.line_index.line_range(line)?;
        Some((range, self.slice(range)?))
    }
}
