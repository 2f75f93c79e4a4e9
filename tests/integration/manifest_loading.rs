//! Loading manifests from disk.

use super::common::{fixture_articles, FIXTURE_MANIFEST};
use lwcsearch::{load_manifest, search, ManifestError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_manifest(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write manifest");
    path
}

#[test]
fn test_load_bare_list_from_disk() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_manifest(
        &dir,
        "articles.json",
        r#"[
            {"title": "Intro to LWC", "desc": "basics", "tags": ["beginner"]},
            {"title": "Advanced Patterns", "description": "LWC deep dive", "tags": ["advanced", "lwc"]}
        ]"#,
    );

    let articles = load_manifest(&path).unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[1].desc, "LWC deep dive");

    let results = search(&articles, "lwc");
    assert_eq!(results[0].title, "Intro to LWC");
    assert_eq!(results[1].title, "Advanced Patterns");
}

#[test]
fn test_load_versioned_keeps_metadata() {
    let articles = fixture_articles();
    assert_eq!(articles[0].href.as_deref(), Some("/posts/intro-to-lwc.html"));
    assert_eq!(articles[0].date.as_deref(), Some("2024-01-08"));
    assert_eq!(articles[7].href, None);
}

#[test]
fn test_fixture_path_loads_directly() {
    let articles = load_manifest(FIXTURE_MANIFEST).unwrap();
    assert_eq!(articles, fixture_articles());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("nope.json");

    let err = load_manifest(&path).unwrap_err();
    assert!(matches!(err, ManifestError::Io { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_malformed_json_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_manifest(&dir, "broken.json", r#"[{"title": "Unclosed""#);

    let err = load_manifest(&path).unwrap_err();
    assert!(matches!(err, ManifestError::Json(_)));
}

#[test]
fn test_future_version_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_manifest(&dir, "v2.json", r#"{"version": 2, "articles": []}"#);

    let err = load_manifest(&path).unwrap_err();
    assert!(matches!(err, ManifestError::UnsupportedVersion { found: 2 }));
}

#[test]
fn test_empty_list_loads() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_manifest(&dir, "empty.json", "[]");

    let articles = load_manifest(&path).unwrap();
    assert!(articles.is_empty());
    assert!(search(&articles, "").is_empty());
}
