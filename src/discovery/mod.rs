//! File discovery and document loading.
//!
//! Finds SVG documents in a project directory, either below the paths
//! listed in a `vecscene.yaml` manifest or below the root itself.
//!
//! # Example
//!
//! ```ignore
//! use vecscene::discovery::discover;
//!
//! let result = discover("./artwork")?;
//! for file in &result.files {
//!     let document = vecscene::discovery::load_document(file)?;
//!     println!("{}: {} group(s)", file.display(), document.groups.len());
//! }
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SceneError};
use crate::parser::parse_svg;
use crate::types::SceneDocument;

pub use manifest::Manifest;
pub use scanner::{is_svg_file, scan_directory, scan_sources};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "vecscene.yaml";

/// Result of discovering documents.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if none was found).
    pub manifest: Manifest,

    /// Whether a manifest file was found.
    pub has_manifest: bool,

    /// Discovered SVG files.
    pub files: Vec<PathBuf>,
}

/// Discover documents in a project directory.
///
/// Uses `vecscene.yaml` in `root` when present, otherwise scans the
/// whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let files = scan_sources(&manifest.effective_sources(), &root, &manifest);
    debug!(root = %root.display(), files = files.len(), has_manifest, "Discovered documents");

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        files,
    })
}

/// Discover documents from explicit files and directories (no manifest).
///
/// Files are taken as given, whatever their extension; directories are
/// scanned for `.svg` files.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_directory(path, &manifest));
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(SceneError::Io {
                path: path.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        files,
    })
}

/// Read and parse one SVG file.
pub fn load_document(path: &Path) -> Result<SceneDocument> {
    let source = std::fs::read_to_string(path).map_err(|e| SceneError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read document: {}", e),
    })?;

    parse_svg(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert!(result.files.is_empty());
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();

        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            "sources:\n  - icons/\ndeny_warnings: true\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("icons")).unwrap();
        fs::write(dir.path().join("icons/home.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("outside.svg"), "<svg/>").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(result.has_manifest);
        assert!(result.manifest.deny_warnings);
        assert_eq!(result.files, vec![dir.path().join("icons/home.svg")]);
    }

    #[test]
    fn test_discover_paths_mixed() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("single.svg");
        fs::write(&file, "<svg/>").unwrap();
        fs::create_dir_all(dir.path().join("more")).unwrap();
        fs::write(dir.path().join("more/other.svg"), "<svg/>").unwrap();

        let result = discover_paths(&[file.clone(), dir.path().join("more")]).unwrap();

        assert_eq!(result.files, vec![file, dir.path().join("more/other.svg")]);
    }

    #[test]
    fn test_discover_paths_missing() {
        let err = discover_paths(&[PathBuf::from("/nonexistent/file.svg")]).unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
    }

    #[test]
    fn test_load_document() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("doc.svg");
        fs::write(&file, r#"<svg><title>T</title><g><path d="M0 0"/></g></svg>"#).unwrap();

        let document = load_document(&file).unwrap();
        assert_eq!(document.title.as_deref(), Some("T"));
        assert_eq!(document.paths().len(), 1);

        assert!(load_document(&dir.path().join("missing.svg")).is_err());
    }
}
