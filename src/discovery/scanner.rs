//! File system scanner for SVG documents.

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use super::manifest::Manifest;

/// Check whether a path names an SVG document.
pub fn is_svg_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

/// Recursively collect `.svg` files below `root`, sorted by path.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if !root.exists() {
        return files;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || !is_svg_file(path) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if manifest.is_excluded(relative) {
            trace!(path = %path.display(), "Excluded");
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    files
}

/// Scan several source directories relative to `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        files.extend(scan_directory(&source_path, manifest));
    }

    files
}
