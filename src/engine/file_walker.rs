//! Content file discovery
//!
//! Walks each root recursively, pruning hidden and dependency directories and
//! keeping only files with a recognised content extension. Ignore files such
//! as `.gitignore` are not consulted.

use ignore::{DirEntry, WalkBuilder};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Extensions (lowercase, without the dot) of files that get scanned
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx", "markdown", "txt"];

/// Directory names that are never descended into
pub const DEPENDENCY_DIRS: &[&str] = &["node_modules"];

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Iterator over the content files under one root
pub struct FileWalker {
    root: PathBuf,
}

impl FileWalker {
    /// Creates a new FileWalker for `root`
    ///
    /// `root` may be a directory or a single file.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walks the tree and yields matching files sorted by name at each level
    ///
    /// A root that does not exist yields nothing.
    pub fn walk(self) -> Box<dyn Iterator<Item = Result<PathBuf, FileWalkerError>>> {
        if !self.root.exists() {
            debug!(root = %self.root.display(), "root does not exist, nothing to walk");
            return Box::new(std::iter::empty());
        }

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| !is_excluded_dir(entry))
            .build();

        Box::new(walker.filter_map(|result| match result {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    return None;
                }

                let path = strip_current_dir(entry.into_path());
                if has_content_extension(&path) {
                    Some(Ok(path))
                } else {
                    debug!(path = %path.display(), "skipping file with unrecognised extension");
                    None
                }
            }
            Err(e) => Some(Err(FileWalkerError::Walk(e))),
        }))
    }
}

/// Collects content files under every root, in root order
///
/// # Errors
///
/// Returns `FileWalkerError` if a directory below a root cannot be listed.
pub fn collect_files(roots: &[PathBuf]) -> Result<Vec<PathBuf>, FileWalkerError> {
    let mut files = Vec::new();

    for root in roots {
        for result in FileWalker::new(root).walk() {
            files.push(result?);
        }
    }

    Ok(files)
}

/// Drops a leading `./`, so a walk of `.` reports `docs/a.md` rather than `./docs/a.md`
pub fn strip_current_dir(path: PathBuf) -> PathBuf {
    match path.strip_prefix(".") {
        Ok(rest) if !rest.as_os_str().is_empty() => rest.to_path_buf(),
        _ => path,
    }
}

/// Whether a file's lowercase extension is a content extension
pub fn has_content_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Whether a directory name is hidden or a dependency directory
pub fn is_excluded_dir_name(name: &str) -> bool {
    name.starts_with('.') || DEPENDENCY_DIRS.contains(&name)
}

// The root itself is always walked, whatever its name.
fn is_excluded_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }

    let excluded = entry
        .file_name()
        .to_str()
        .is_some_and(is_excluded_dir_name);
    if excluded {
        debug!(path = %entry.path().display(), "skipping excluded directory");
    }
    excluded
}
