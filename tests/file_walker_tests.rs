//! Integration tests for file_walker module
//!
//! These tests build content trees in temporary directories to verify
//! extension filtering, directory exclusion and ordering.

mod common;

use charcheck::engine::file_walker::{FileWalker, collect_files};
use common::write_file;
use std::collections::HashSet;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to extract file names relative to a root
fn relative_names(root: &std::path::Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .filter_map(|f| f.strip_prefix(root).ok())
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect()
}

fn content_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "index.md", "# Home");
    write_file(root, "posts/2024-01-01-hello.markdown", "hello");
    write_file(root, "posts/draft.MDX", "draft");
    write_file(root, "notes/todo.txt", "todo");
    write_file(root, "notes/script.js", "console.log(1)");
    write_file(root, "assets/logo.svg", "<svg/>");
    write_file(root, ".git/COMMIT_EDITMSG.txt", "msg");
    write_file(root, ".cache/page.md", "cached");
    write_file(root, "node_modules/pkg/README.md", "readme");
    write_file(root, "posts/node_modules/nested/README.md", "readme");
    temp_dir
}

#[test]
fn test_walk_collects_content_files_only() {
    let temp_dir = content_tree();
    let files = assert_ok!(collect_files(&[temp_dir.path().to_path_buf()]));

    let names: HashSet<String> = relative_names(temp_dir.path(), &files).into_iter().collect();
    let expected: HashSet<String> = [
        "index.md",
        "notes/todo.txt",
        "posts/2024-01-01-hello.markdown",
        "posts/draft.MDX",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    assert_eq!(names, expected);
}

#[test]
fn test_walk_excludes_hidden_and_dependency_dirs() {
    let temp_dir = content_tree();
    let files = assert_ok!(collect_files(&[temp_dir.path().to_path_buf()]));

    for file in &files {
        let components: Vec<String> = file
            .strip_prefix(temp_dir.path())
            .unwrap()
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        assert!(
            !components.iter().any(|c| c == "node_modules" || c.starts_with('.')),
            "unexpected file {}",
            file.display()
        );
    }
}

#[test]
fn test_walk_order_is_sorted() {
    let temp_dir = content_tree();
    let files = assert_ok!(collect_files(&[temp_dir.path().to_path_buf()]));

    assert_eq!(
        relative_names(temp_dir.path(), &files),
        vec![
            "index.md",
            "notes/todo.txt",
            "posts/2024-01-01-hello.markdown",
            "posts/draft.MDX",
        ]
    );
}

#[test]
fn test_walk_multiple_roots_keep_root_order() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "zeta/z.md", "z");
    write_file(temp_dir.path(), "alpha/a.md", "a");

    let roots = vec![temp_dir.path().join("zeta"), temp_dir.path().join("alpha")];
    let files = assert_ok!(collect_files(&roots));

    assert_eq!(
        relative_names(temp_dir.path(), &files),
        vec!["zeta/z.md", "alpha/a.md"]
    );
}

#[test]
fn test_walk_missing_root_contributes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "docs/a.md", "a");

    let roots = vec![temp_dir.path().join("missing"), temp_dir.path().join("docs")];
    let files = assert_ok!(collect_files(&roots));
    assert_eq!(files.len(), 1);
}

#[test]
fn test_walk_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let files: Vec<_> = FileWalker::new(temp_dir.path()).walk().collect();
    assert!(files.is_empty());
}

#[test]
fn test_walk_ignores_gitignore() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), ".gitignore", "*.md\n");
    write_file(temp_dir.path(), "kept.md", "x");

    let files = assert_ok!(collect_files(&[temp_dir.path().to_path_buf()]));
    assert_eq!(relative_names(temp_dir.path(), &files), vec!["kept.md"]);
}
