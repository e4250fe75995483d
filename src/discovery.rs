// src/discovery.rs
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::lang::Lang;

const PRUNE_DIRS: &[&str] = &[".git", ".svn", ".hg", "vendor", "node_modules"];

/// Runs the file discovery pipeline: walk the given roots, keep PHP
/// sources, then apply the config's include/exclude patterns.
///
/// # Errors
/// Walk errors on individual entries are counted and reported in
/// verbose mode rather than aborting the run.
pub fn discover(roots: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let mut errors = 0usize;

    for root in roots {
        if root.is_file() {
            paths.push(root.clone());
            continue;
        }
        walk_root(root, config.recursive, &mut paths, &mut errors);
    }

    if errors > 0 && config.verbose {
        eprintln!("WARN: Encountered {errors} errors during file walk");
    }

    paths.retain(|p| is_php(p));
    Ok(filter_config(paths, config))
}

fn walk_root(root: &Path, recursive: bool, paths: &mut Vec<PathBuf>, errors: &mut usize) {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(root)
        .max_depth(max_depth)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_prune(&e.file_name().to_string_lossy()));

    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => *errors += 1,
        }
    }
}

fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

fn is_php(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(Lang::from_ext)
        .is_some()
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn filter_config(mut paths: Vec<PathBuf>, config: &Config) -> Vec<PathBuf> {
    if !config.include_patterns.is_empty() {
        paths.retain(|p| {
            let s = normalize_path(p);
            config.include_patterns.iter().any(|re| re.is_match(&s))
        });
    }

    if !config.exclude_patterns.is_empty() {
        paths.retain(|p| {
            let s = normalize_path(p);
            !config.exclude_patterns.iter().any(|re| re.is_match(&s))
        });
    }

    paths
}
