//! Corpus ingestion.
//!
//! The engines never touch the filesystem; this module is the seam between
//! file paths and `add_document`. Path strings double as the document
//! identifiers, so whatever form the caller used (relative, absolute) is the
//! form queries report back.

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::engine::SearchEngine;

/// What a corpus load actually did.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadSummary {
    pub documents: usize,
    pub skipped: usize,
}

/// Load documents into `engine` from files and directories.
///
/// Paths named directly must be readable; a missing or unreadable one is an
/// error. Directories are walked with ignore rules and hidden files
/// respected, and their entries are filtered instead: unreadable, binary, or
/// oversized files are counted as skipped, not fatal. The combined file list
/// is sorted (and exact duplicates collapsed) before indexing, so document
/// ids never depend on walk order. Contents are read in parallel; indexing
/// itself stays sequential in sorted order.
pub fn load_paths(
    engine: &mut dyn SearchEngine,
    paths: &[PathBuf],
    config: &AppConfig,
) -> Result<LoadSummary> {
    // Phase 1: expand directories into candidate files. The bool marks
    // paths the caller named directly, which are not allowed to fail.
    let mut files: Vec<(PathBuf, bool)> = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_dir(path, &mut files);
        } else {
            files.push((path.clone(), true));
        }
    }

    files.sort();
    files.dedup_by(|b, a| {
        if b.0 == a.0 {
            a.1 |= b.1;
            true
        } else {
            false
        }
    });

    // Phase 2: read in parallel, index sequentially in path order.
    let contents: Vec<(PathBuf, bool, std::io::Result<Vec<u8>>)> = files
        .into_par_iter()
        .map(|(path, required)| {
            let bytes = fs::read(&path);
            (path, required, bytes)
        })
        .collect();

    let mut summary = LoadSummary::default();
    for (path, required, bytes) in contents {
        let bytes = match bytes {
            Ok(bytes) => bytes,
            Err(err) if required => {
                return Err(err)
                    .with_context(|| format!("corpus source unavailable: {}", path.display()));
            }
            Err(_) => {
                summary.skipped += 1;
                continue;
            }
        };

        if bytes.len() as u64 > config.max_file_size || is_binary(&bytes) {
            summary.skipped += 1;
            continue;
        }

        let name = path.display().to_string();
        let text = String::from_utf8_lossy(&bytes);
        engine.add_document(&name, &text)?;
        summary.documents += 1;
    }

    Ok(summary)
}

fn collect_dir(root: &Path, files: &mut Vec<(PathBuf, bool)>) {
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .build();

    for entry in walker.filter_map(|entry| entry.ok()) {
        if entry.path().is_file() {
            files.push((entry.path().to_path_buf(), false));
        }
    }
}

/// Check if content is likely binary.
///
/// NUL bytes or a high share of control bytes in the head of the file mean
/// no textual query will ever match it.
fn is_binary(content: &[u8]) -> bool {
    let sample_size = content.len().min(8192);
    let sample = &content[..sample_size];

    if sample.contains(&0) {
        return true;
    }

    let non_text_count = sample
        .iter()
        .filter(|&&b| b < 0x20 && b != b'\n' && b != b'\r' && b != b'\t')
        .count();

    non_text_count > sample_size / 8
}
