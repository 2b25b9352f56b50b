use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files in lexicographic order.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Collect every source file under `root` whose extension is in `extensions`.
///
/// `root` may also name a single file: it is scanned on its own when its
/// extension matches, otherwise a warning is logged and nothing is returned.
/// Extensions are compared case-sensitively, with or without a leading dot.
pub fn scan_files(root: &Path, extensions: &[String], ignore_patterns: &[String]) -> ScanResult {
    let extensions: Vec<&str> = extensions
        .iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect();

    if root.is_file() {
        return scan_single_file(root, &extensions);
    }

    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => tracing::warn!("invalid ignore pattern '{}': {}", p, e),
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                tracing::warn!("cannot access path: {}", e);
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && has_extension(path, &extensions) {
            files.insert(path_str.into_owned());
        }
    }

    tracing::debug!(
        root = %root.display(),
        files = files.len(),
        skipped = skipped_count,
        "scan finished"
    );

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn scan_single_file(path: &Path, extensions: &[&str]) -> ScanResult {
    if has_extension(path, extensions) {
        return ScanResult {
            files: vec![path.to_string_lossy().into_owned()],
            skipped_count: 0,
        };
    }

    tracing::warn!(
        "{} does not have a scanned extension ({}), skipping",
        path.display(),
        extensions.join(", ")
    );
    ScanResult::default()
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}
