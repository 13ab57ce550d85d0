use ahash::AHashMap;

use crate::error::EngineError;
use crate::index::DocId;

/// Bidirectional table of indexed documents.
///
/// Maps external identifiers (the caller's names, typically file paths) to
/// dense internal [`DocId`]s and back. Ids are assigned in insertion order,
/// which is what keeps every postings list sorted without ever sorting it.
#[derive(Debug, Default)]
pub struct DocTable {
    names: Vec<String>,
    name_to_id: AHashMap<String, DocId>,
}

impl DocTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document and hand back its id.
    ///
    /// A name that is already present is rejected before any state changes,
    /// so a failed insert leaves the table exactly as it was.
    pub fn insert(&mut self, name: &str) -> Result<DocId, EngineError> {
        if self.name_to_id.contains_key(name) {
            return Err(EngineError::DuplicateDocument(name.to_string()));
        }

        let id = self.names.len() as DocId;
        self.names.push(name.to_string());
        self.name_to_id.insert(name.to_string(), id);
        Ok(id)
    }

    /// External identifier for `id`, if it was ever assigned.
    pub fn name(&self, id: DocId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
