use ahash::AHashMap;

use crate::index::DocId;

/// Term → postings list map, the heart of the inverted index.
///
/// Each list holds the ids of the documents containing the term, in the
/// order the documents were indexed. Because ids are assigned in that same
/// order and a document is appended at most once per term, every list is
/// strictly increasing, which is the precondition for the merge intersection.
#[derive(Debug, Default)]
pub struct PostingsStore {
    postings: AHashMap<String, Vec<DocId>>,
}

impl PostingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` to the postings list for `term`, creating the list on
    /// first use.
    pub fn append(&mut self, term: String, id: DocId) {
        self.postings.entry(term).or_default().push(id);
    }

    /// Postings list for `term`. A term never seen yields `None`, which
    /// callers treat as an empty list.
    pub fn get(&self, term: &str) -> Option<&[DocId]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}
