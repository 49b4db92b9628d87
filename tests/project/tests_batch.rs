//! Batch loading from local files

#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::helpers::init_tracing;
use crate::helpers::source_fixtures::{CAT, package};
use devkitty::project::{RetrievalError, split_sources};
use devkitty::{DocumentLoader, ErrorCode, FileFetcher, LoadError, Registry, load_all};

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, text) in files {
        fs::write(dir.path().join(name), text).unwrap();
    }
    dir
}

#[test]
fn test_load_files_in_order() {
    init_tracing();
    let core = package("1", &[("home", "M1"), ("star", "M2")]);
    let brands = package("4", &[("star", "M9"), ("kitty", "M3")]);
    let dir = workspace(&[("core.dkf", core.as_str()), ("brands.dkf", brands.as_str())]);

    let mut registry = Registry::new();
    let report = load_all(
        &mut registry,
        FileFetcher::with_base_dir(dir.path()),
        &["core.dkf", "brands.dkf"],
    )
    .unwrap();

    assert_eq!(report.sources, 2);
    assert_eq!(report.icons, 3);
    assert_eq!(registry.get("star").unwrap().paths(), ["M9"]);
    assert_eq!(registry.meta().unwrap().version, "4");
}

#[test]
fn test_sources_from_attribute_value() {
    let dog = package("1", &[("dog", "M0")]);
    let dir = workspace(&[("a.dkf", CAT), ("b.dkf", dog.as_str())]);
    let sources = split_sources(" a.dkf\n  b.dkf ");

    let mut registry = Registry::new();
    DocumentLoader::new(FileFetcher::with_base_dir(dir.path()))
        .load_all(&mut registry, &sources)
        .unwrap();

    assert_eq!(registry.names().collect::<Vec<_>>(), ["cat", "dog"]);
}

#[test]
fn test_empty_batch_fails_without_touching_registry() {
    let mut registry = Registry::new();
    registry.parse(CAT).unwrap();

    let sources: Vec<String> = Vec::new();
    let err = load_all(&mut registry, FileFetcher::new(), &sources).unwrap_err();

    assert!(matches!(err, LoadError::Usage));
    assert_eq!(err.code(), ErrorCode::E0502);
    assert!(registry.contains("cat"));
}

#[test]
fn test_missing_file_aborts_batch() {
    let dir = workspace(&[("a.dkf", CAT)]);
    let mut registry = Registry::new();

    let err = load_all(
        &mut registry,
        FileFetcher::with_base_dir(dir.path()),
        &["a.dkf", "gone.dkf"],
    )
    .unwrap_err();

    assert!(matches!(err, LoadError::Retrieval(RetrievalError::Io { .. })));
    assert_eq!(err.code(), ErrorCode::E0501);
    assert!(registry.contains("cat"));
}

#[test]
fn test_parse_failure_in_batch() {
    let dir = workspace(&[("a.dkf", CAT), ("bad.dkf", "@meta { format devkitty }")]);
    let mut registry = Registry::new();

    let err = load_all(
        &mut registry,
        FileFetcher::with_base_dir(dir.path()),
        &["a.dkf", "bad.dkf"],
    )
    .unwrap_err();

    assert_eq!(err.code(), ErrorCode::E0201);
    assert!(err.to_string().starts_with("bad.dkf: "));
    assert!(registry.is_empty());
}
