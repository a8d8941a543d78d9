//! Locating specification documents on disk.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};

/// Lists every document under `config.source_dir` with the configured
/// extension, in sorted path order.
///
/// Hidden entries (name starting with `.`) are skipped unless
/// `include_hidden` is set; subdirectories are only visited when
/// `recursive` is set.
///
/// # Errors
///
/// [`GenerateError::Listing`] if a directory cannot be read, and
/// [`GenerateError::EmptyInput`] if nothing matched.
pub fn collect_document_paths(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let mut paths = BTreeSet::new();
    visit_dir(&config.source_dir, config, &mut paths)?;

    if paths.is_empty() {
        return Err(GenerateError::EmptyInput {
            dir: config.source_dir.clone(),
            extension: config.extension.trim_start_matches('.').to_uppercase(),
        });
    }

    debug!(
        dir = %config.source_dir.display(),
        count = paths.len(),
        "Collected specification documents"
    );

    Ok(paths.into_iter().collect())
}

fn visit_dir(dir: &Path, config: &GeneratorConfig, paths: &mut BTreeSet<PathBuf>) -> Result<()> {
    let listing_error = |source: std::io::Error| GenerateError::Listing {
        dir: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(listing_error)? {
        let entry = entry.map_err(listing_error)?;
        let path = entry.path();

        if !config.include_hidden && is_hidden(&path) {
            continue;
        }

        if path.is_dir() {
            if config.recursive {
                visit_dir(&path, config, paths)?;
            }
            continue;
        }

        if path.is_file() && config.matches_extension(&path) {
            paths.insert(path);
        }
    }

    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
