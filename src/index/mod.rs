pub mod docs;
pub mod intersect;
pub mod postings;

pub use docs::DocTable;
pub use intersect::intersect_postings;
pub use postings::PostingsStore;

/// Internal document handle, assigned densely in insertion order.
///
/// Postings lists hold these rather than the external identifiers, which
/// gives every list a built-in total order: a document indexed later always
/// carries a larger id.
pub type DocId = u32;
