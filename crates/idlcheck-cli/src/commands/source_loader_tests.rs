use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indoc::indoc;

use super::source_loader::{decode, json_paths, load_sources};

const USED: &str = indoc! {r#"
    {
      "namespace-imports": { "common": "common.yml" },
      "type-definitions": {
        "When": { "alias": { "alias": { "foreign-reference": { "namespace": "common", "type-name": "Instant" } } } }
      }
    }
"#};

#[test]
fn loads_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("api.json");
    fs::write(&path, USED).unwrap();

    let sources = load_sources(Some(&path)).unwrap();

    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].path, path.to_string_lossy());
    assert_eq!(sources[0].file.namespace_imports.len(), 1);
}

#[test]
fn loads_directory_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.json"), "{}").unwrap();
    fs::write(dir.path().join("a.json"), USED).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a source file").unwrap();

    let sources = load_sources(Some(dir.path())).unwrap();

    let names: Vec<_> = sources
        .iter()
        .map(|s| Path::new(&s.path).file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.json", "b.json"]);
}

#[test]
fn empty_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "").unwrap();

    let err = load_sources(Some(dir.path())).unwrap_err();

    assert!(err.starts_with("no .json source files found in"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = load_sources(Some(&path)).unwrap_err();

    assert!(err.starts_with("failed to read '"));
}

#[test]
fn malformed_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"services\": 3 }").unwrap();

    let err = load_sources(Some(&path)).unwrap_err();

    assert!(err.starts_with(&format!("failed to decode '{}'", path.display())));
}

#[test]
fn missing_source_argument() {
    let err = load_sources(None).unwrap_err();

    insta::assert_snapshot!(err, @"source is required: pass a JSON file, a directory, or - for stdin");
}

#[test]
fn decode_keeps_reported_path() {
    let source = decode("<stdin>", "{}").unwrap();

    assert_eq!(source.path, "<stdin>");
    assert!(!source.file.has_imports());
}

#[test]
fn unreadable_entry_fails_directory() {
    let dir = Path::new("schemas");
    let entries = vec![
        Ok(PathBuf::from("schemas/a.json")),
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")),
        Ok(PathBuf::from("schemas/b.json")),
    ];

    let err = json_paths(dir, entries.into_iter()).unwrap_err();

    insta::assert_snapshot!(err, @"failed to read directory 'schemas': permission denied");
}

#[test]
fn json_paths_filters_and_sorts() {
    let dir = Path::new("schemas");
    let entries = vec![
        Ok(PathBuf::from("schemas/z.json")),
        Ok(PathBuf::from("schemas/readme.md")),
        Ok(PathBuf::from("schemas/a.json")),
    ];

    let paths = json_paths(dir, entries.into_iter()).unwrap();

    assert_eq!(
        paths,
        [PathBuf::from("schemas/a.json"), PathBuf::from("schemas/z.json")]
    );
}
