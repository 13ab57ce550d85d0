use thiserror::Error;

/// Errors surfaced by the indexing side of an engine.
///
/// Queries never fail: an unknown term, an empty query, or an empty index all
/// produce an empty result rather than an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A document with this identifier was already indexed. Accepting it
    /// again would append its id to term lists a second time and break the
    /// sorted-unique shape the intersection relies on.
    #[error("duplicate document: {0}")]
    DuplicateDocument(String),
}
