//! # bowix - Bag-of-Words Search Engine
//!
//! bowix is an in-memory full-text search engine for document corpora:
//! documents are tokenized into term sets, each term maps to a postings list
//! of the documents containing it, and conjunctive (AND) queries are answered
//! by a synchronized merge over those lists, fronted by a small LRU result
//! cache.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tokenizer`] - The one normalization shared by documents and queries
//! - [`index`] - Document table, postings lists, merge intersection
//! - [`engine`] - Interchangeable search strategies behind one trait
//! - [`cache`] - LRU result cache layered over any engine
//! - [`corpus`] - Loading files and directories into an engine
//! - [`repl`] - Interactive query loop
//! - [`output`] - Terminal and JSON result formatting
//! - [`config`] - Persistent user defaults
//!
//! ## Quick Start
//!
//! ```
//! use bowix::cache::CachedEngine;
//! use bowix::engine::{EngineKind, SearchEngine};
//!
//! let mut engine = EngineKind::Inverted.build();
//! engine.add_document("1", "the cat sat").unwrap();
//! engine.add_document("2", "the dog sat").unwrap();
//!
//! let engine = CachedEngine::with_default_capacity(engine);
//! let hits = engine.search("cat");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(engine.doc_name(hits[0]), Some("1"));
//! ```

pub mod cache;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod output;
pub mod repl;
pub mod tokenizer;
