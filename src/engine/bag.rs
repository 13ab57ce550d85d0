use std::collections::HashSet;

use crate::engine::SearchEngine;
use crate::error::EngineError;
use crate::index::{DocId, DocTable};
use crate::tokenizer::tokenize;

/// Bag-of-words scan: one token set per document, no index.
///
/// Documents and queries tokenize the same way, and a document matches when
/// its set contains every query term. Still a full scan on every query, but
/// the per-document check is set containment rather than substring search,
/// which already buys word-boundary and case-insensitive matching.
#[derive(Debug, Default)]
pub struct BagEngine {
    docs: DocTable,
    token_sets: Vec<HashSet<String>>,
}

impl BagEngine {
    pub fn new() -> Self {
        Self {
            docs: DocTable::new(),
            token_sets: Vec::new(),
        }
    }
}

impl SearchEngine for BagEngine {
    fn add_document(&mut self, name: &str, text: &str) -> Result<DocId, EngineError> {
        let id = self.docs.insert(name)?;
        self.token_sets.push(tokenize(text));
        Ok(id)
    }

    fn search(&self, query: &str) -> Vec<DocId> {
        let terms = tokenize(query);
        if terms.is_empty() {
            return Vec::new();
        }

        self.token_sets
            .iter()
            .enumerate()
            .filter(|(_, set)| terms.iter().all(|term| set.contains(term)))
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
