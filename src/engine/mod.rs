pub mod bag;
pub mod inverted;
pub mod scan;

pub use bag::BagEngine;
pub use inverted::InvertedIndexEngine;
pub use scan::ScanEngine;

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::error::EngineError;
use crate::index::DocId;

/// Common surface of every search strategy.
///
/// Indexing is the only fallible, mutating operation; queries are read-only
/// and never fail. The trait is object-safe so the strategy is chosen once,
/// at construction, and the rest of the program holds a boxed engine.
pub trait SearchEngine {
    /// Index `text` under the external identifier `name`.
    ///
    /// Identifiers are unique for the lifetime of the engine; indexing the
    /// same name twice is rejected.
    fn add_document(&mut self, name: &str, text: &str) -> Result<DocId, EngineError>;

    /// Ids of all documents matching `query`, in indexing order.
    fn search(&self, query: &str) -> Vec<DocId>;

    /// External identifier for a previously returned id.
    fn doc_name(&self, id: DocId) -> Option<&str>;

    /// Number of indexed documents.
    fn doc_count(&self) -> usize;

    /// Hit/miss accounting, for engines that cache query results.
    fn cache_stats(&self) -> Option<CacheStats> {
        None
    }
}

impl<E: SearchEngine + ?Sized> SearchEngine for Box<E> {
    fn add_document(&mut self, name: &str, text: &str) -> Result<DocId, EngineError> {
        (**self).add_document(name, text)
    }

    fn search(&self, query: &str) -> Vec<DocId> {
        (**self).search(query)
    }

    fn doc_name(&self, id: DocId) -> Option<&str> {
        (**self).doc_name(id)
    }

    fn doc_count(&self) -> usize {
        (**self).doc_count()
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        (**self).cache_stats()
    }
}

/// Search strategy, selected at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Raw substring scan over the stored text of every document.
    Scan,
    /// Bag-of-words scan: per-document token-set containment.
    Bag,
    /// Inverted index with merge intersection.
    #[default]
    Inverted,
}

impl EngineKind {
    pub fn from_name(name: &str) -> Option<EngineKind> {
        match name {
            "scan" => Some(EngineKind::Scan),
            "bag" => Some(EngineKind::Bag),
            "inverted" => Some(EngineKind::Inverted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Scan => "scan",
            EngineKind::Bag => "bag",
            EngineKind::Inverted => "inverted",
        }
    }

    /// Construct an empty engine of this kind.
    pub fn build(&self) -> Box<dyn SearchEngine> {
        match self {
            EngineKind::Scan => Box::new(ScanEngine::new()),
            EngineKind::Bag => Box::new(BagEngine::new()),
            EngineKind::Inverted => Box::new(InvertedIndexEngine::new()),
        }
    }
}
