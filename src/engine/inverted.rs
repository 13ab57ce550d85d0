use crate::engine::SearchEngine;
use crate::error::EngineError;
use crate::index::{DocId, DocTable, PostingsStore, intersect_postings};
use crate::tokenizer::tokenize;

/// The workhorse strategy: a term → postings inverted index.
///
/// Indexing tokenizes each document once and appends its id to the postings
/// list of every distinct term. A conjunctive query then touches only the
/// lists of its own terms instead of every document, and the synchronized
/// merge walks those lists in a single pass.
#[derive(Debug, Default)]
pub struct InvertedIndexEngine {
    docs: DocTable,
    postings: PostingsStore,
}

impl InvertedIndexEngine {
    pub fn new() -> Self {
        Self {
            docs: DocTable::new(),
            postings: PostingsStore::new(),
        }
    }

    /// Number of distinct terms currently indexed.
    #[allow(dead_code)]
    pub fn term_count(&self) -> usize {
        self.postings.term_count()
    }
}

impl SearchEngine for InvertedIndexEngine {
    fn add_document(&mut self, name: &str, text: &str) -> Result<DocId, EngineError> {
        let id = self.docs.insert(name)?;
        for term in tokenize(text) {
            self.postings.append(term, id);
        }
        Ok(id)
    }

    fn search(&self, query: &str) -> Vec<DocId> {
        let terms = tokenize(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut lists = Vec::with_capacity(terms.len());
        for term in &terms {
            match self.postings.get(term) {
                Some(list) => lists.push(list),
                // A term no document contains: the conjunction cannot match,
                // skip the merge entirely.
                None => return Vec::new(),
            }
        }

        intersect_postings(&lists)
    }

    fn doc_name(&self, id: DocId) -> Option<&str> {
        self.docs.name(id)
    }

    fn doc_count(&self) -> usize {
        self.docs.len()
    }
}
