//! The interactive query loop.
//!
//! Reads one query per line, prints the matching identifiers, and stops on a
//! literal `q` or end of input. The streams are generic so tests can drive
//! the loop with in-memory buffers instead of a terminal.

use std::io::{self, BufRead, Write};
use std::time::Instant;
use termcolor::WriteColor;

use crate::engine::SearchEngine;
use crate::output::{self, QueryResponse};

const PROMPT: &str = "query> ";
const QUIT: &str = "q";

/// Run one query against `engine` and package the outcome.
///
/// Identifiers are resolved to their external names, and a cache hit is
/// detected by watching the engine's hit counter across the call.
pub fn run_query(engine: &dyn SearchEngine, query: &str) -> QueryResponse {
    let hits_before = engine.cache_stats().map(|stats| stats.hits).unwrap_or(0);

    let started = Instant::now();
    let ids = engine.search(query);
    let duration_ms = started.elapsed().as_secs_f64() * 1000.0;

    let cached = engine
        .cache_stats()
        .map(|stats| stats.hits > hits_before)
        .unwrap_or(false);

    let results = ids
        .iter()
        .filter_map(|&id| engine.doc_name(id))
        .map(str::to_string)
        .collect();

    QueryResponse {
        query: query.to_string(),
        count: ids.len(),
        results,
        duration_ms,
        cached,
    }
}

/// Run the loop until `q` or EOF.
pub fn run<R, W>(engine: &dyn SearchEngine, mut input: R, mut out: W) -> io::Result<()>
where
    R: BufRead,
    W: WriteColor,
{
    writeln!(
        out,
        "{} document(s) indexed, enter a query (q to quit)",
        engine.doc_count()
    )?;

    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        // Only the line ending is stripped; the rest of the line is the
        // query exactly as typed, which is also the cache key.
        let query = line.trim_end_matches(['\r', '\n']);
        if query == QUIT {
            break;
        }

        let response = run_query(engine, query);
        output::print_results(&mut out, &response)?;
    }

    if let Some(stats) = engine.cache_stats() {
        writeln!(
            out,
            "cache: {} hit(s), {} miss(es), {}/{} entries ({:.0}% hit rate)",
            stats.hits,
            stats.misses,
            stats.entries,
            stats.capacity,
            stats.hit_rate() * 100.0
        )?;
    }

    Ok(())
}
