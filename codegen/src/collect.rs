//! Batch extraction and ordering.

use std::path::PathBuf;

use command_syntax_core::natural_cmp;
use rayon::prelude::*;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::discover::collect_document_paths;
use crate::error::Result;
use crate::extract::{CommandEntry, extract};

/// Sorts entries by command name in descending natural order.
///
/// The sort is stable: entries with equal names keep their relative order.
///
/// # Examples
///
/// ```
/// use command_syntax_codegen::{CommandEntry, sort_entries};
///
/// let mut entries = vec![
///     CommandEntry::new("SET1", Vec::new()),
///     CommandEntry::new("SET10", Vec::new()),
///     CommandEntry::new("SET2", Vec::new()),
/// ];
/// sort_entries(&mut entries);
///
/// let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, vec!["SET10", "SET2", "SET1"]);
/// ```
pub fn sort_entries(entries: &mut [CommandEntry]) {
    entries.sort_by(|a, b| natural_cmp(&b.name, &a.name));
}

/// Extracts every document and returns the sorted entries.
///
/// Documents are extracted on a rayon pool of `jobs` threads (adaptive
/// default when `None`). If any document fails, the error for the first
/// failing path in input order is returned and no entries are produced.
pub fn extract_all(paths: &[PathBuf], jobs: Option<usize>) -> Result<Vec<CommandEntry>> {
    let jobs = jobs
        .filter(|jobs| *jobs > 0)
        .unwrap_or_else(|| default_parallel_jobs(paths.len()));

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()?;

    // Results are gathered in input order first so the reported failure is
    // the first failing path rather than the first one to finish.
    let results: Vec<Result<CommandEntry>> =
        pool.install(|| paths.par_iter().map(|path| extract(path)).collect());
    let mut entries = results.into_iter().collect::<Result<Vec<_>>>()?;

    sort_entries(&mut entries);
    Ok(entries)
}

/// Discovers, extracts and orders all commands described by `config`.
pub fn generate_entries(config: &GeneratorConfig) -> Result<Vec<CommandEntry>> {
    let paths = collect_document_paths(config)?;
    let entries = extract_all(&paths, config.jobs)?;

    info!(
        dir = %config.source_dir.display(),
        commands = entries.len(),
        "Extracted command syntax"
    );

    Ok(entries)
}

fn default_parallel_jobs(document_count: usize) -> usize {
    let cpu_count = std::thread::available_parallelism()
        .map(|parallelism| parallelism.get())
        .unwrap_or(4);
    cpu_count.min(document_count.max(1))
}
