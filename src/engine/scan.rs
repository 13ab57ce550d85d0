use crate::engine::SearchEngine;
use crate::error::EngineError;
use crate::index::{DocId, DocTable};

/// The baseline strategy: keep every document's raw text and scan all of it
/// on every query.
///
/// Matching is a plain case-sensitive substring test, so this variant sees
/// phrases and partial words that the tokenized engines deliberately do not.
/// It exists as the reference point the other strategies are checked against
/// on simple queries.
#[derive(Debug, Default)]
pub struct ScanEngine {
    docs: DocTable,
    texts: Vec<String>,
}

impl ScanEngine {
    pub fn new() -> Self {
        Self {
            docs: DocTable::new(),
            texts: Vec::new(),
        }
    }
}

impl SearchEngine for ScanEngine {
    fn add_document(&mut self, name: &str, text: &str) -> Result<DocId, EngineError> {
        let id = self.docs.insert(name)?;
        self.texts.push(text.to_string());
        Ok(id)
    }

    fn search(&self, query: &str) -> Vec<DocId> {
        if query.is_empty() {
            return Vec::new();
        }

        self.texts
            .iter()
            .enumerate()
            .filter(|(_, text)| text.contains(query))
            .map(|(id, _)| id as DocId)
            .collect()
    }

    fn doc_name(&self, id: DocId) -> Option<&str> {
        self.docs.name(id)
    }

    fn doc_count(&self) -> usize {
        self.docs.len()
    }
}
