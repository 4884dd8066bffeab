//! Solution and document snapshots.
//!
//! A [`Solution`] owns the documents that source locations point into. It is
//! a value: clone it to take a snapshot, mutate the clone to move forward.
//! Documents themselves are immutable and shared behind `Arc`.

mod document;

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::base::FileId;
use crate::host::DocumentResolver;

pub use document::Document;

/// An immutable-per-snapshot set of documents.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    documents: FxHashMap<FileId, Arc<Document>>,
    file_id_map: FxHashMap<Arc<str>, FileId>,
    next_id: u32,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document, returning its id.
    ///
    /// Replacing keeps the id the path already had.
    pub fn set_document(&mut self, path: &str, text: &str) -> FileId {
        self.set_project_document(None, path, text)
    }

    /// Add or replace a document that belongs to `project`.
    pub fn set_project_document(&mut self, project: Option<&str>, path: &str, text: &str) -> FileId {
        let id = match self.file_id_map.get(path) {
            Some(&id) => id,
            None => {
                let id = FileId::new(self.next_id);
                self.next_id += 1;
                self.file_id_map.insert(Arc::from(path), id);
                id
            }
        };
        let document = Document::new(id, path, text).with_project(project.map(Arc::from));
        self.documents.insert(id, Arc::new(document));
        id
    }

    /// Remove a document. Its id is never reused.
    pub fn remove_document(&mut self, id: FileId) -> Option<Arc<Document>> {
        let removed = self.documents.remove(&id)?;
        self.file_id_map.remove(removed.path());
        Some(removed)
    }

    pub fn document(&self, id: FileId) -> Option<Arc<Document>> {
        self.documents.get(&id).cloned()
    }

    pub fn file_id(&self, path: &str) -> Option<FileId> {
        self.file_id_map.get(path).copied()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

impl DocumentResolver for Solution {
    fn document(&self, file: FileId) -> Option<Arc<Document>> {
        Solution::document(self, file)
    }
}
