use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use idlcheck_core::{SourceFile, parse_source_file};

/// A decoded source file and the name it is reported under.
#[derive(Debug)]
pub struct LoadedSource {
    pub path: String,
    pub file: SourceFile,
}

pub fn load_sources(source_path: Option<&Path>) -> Result<Vec<LoadedSource>, String> {
    let Some(path) = source_path else {
        return Err("source is required: pass a JSON file, a directory, or - for stdin".to_string());
    };

    if path.as_os_str() == "-" {
        return load_stdin().map(|source| vec![source]);
    }
    if path.is_dir() {
        return load_directory(path);
    }
    load_file(path).map(|source| vec![source])
}

fn load_stdin() -> Result<LoadedSource, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    decode("<stdin>", &buf)
}

fn load_file(path: &Path) -> Result<LoadedSource, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    decode(&path.to_string_lossy(), &content)
}

fn load_directory(dir: &Path) -> Result<Vec<LoadedSource>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("failed to read directory '{}': {}", dir.display(), e))?
        .map(|entry| entry.map(|e| e.path()));
    let paths = json_paths(dir, entries)?;

    paths.iter().map(|path| load_file(path)).collect()
}

/// Sorted `*.json` paths among `entries`. Any unreadable entry fails the whole directory.
pub(crate) fn json_paths(
    dir: &Path,
    entries: impl Iterator<Item = io::Result<PathBuf>>,
) -> Result<Vec<PathBuf>, String> {
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| format!("failed to read directory '{}': {}", dir.display(), e))?;
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(format!(
            "no .json source files found in '{}'",
            dir.display()
        ));
    }

    // Sort for deterministic ordering
    paths.sort();
    Ok(paths)
}

pub(crate) fn decode(path: &str, content: &str) -> Result<LoadedSource, String> {
    let file = parse_source_file(content)
        .map_err(|e| format!("failed to decode '{}': {}", path, e))?;
    debug!(
        path,
        imports = file.namespace_imports.len() + file.external_type_imports.len(),
        "loaded source file"
    );
    Ok(LoadedSource {
        path: path.to_string(),
        file,
    })
}
