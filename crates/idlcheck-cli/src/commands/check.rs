use std::path::PathBuf;

use serde::Serialize;

use idlcheck_compiler::{CheckOutcome, ImportValidationFailure, check};

use super::source_loader::{LoadedSource, load_sources};
use crate::cli::OutputFormat;

pub struct CheckArgs {
    pub source_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: bool,
}

/// A source file together with its check outcome.
pub struct CheckedSource {
    pub path: String,
    pub outcome: CheckOutcome,
}

pub fn run(args: CheckArgs) {
    let sources = match load_sources(args.source_path.as_deref()) {
        Ok(sources) => sources,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let checked = check_all(sources);
    let is_valid = checked.iter().all(|c| c.outcome.is_valid());

    match args.format {
        OutputFormat::Text => {
            if !is_valid {
                eprint!("{}", render_text(&checked, args.color));
            }
        }
        OutputFormat::Json => match render_json(&checked) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to write report: {}", e);
                std::process::exit(1);
            }
        },
    }

    if !is_valid {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

pub fn check_all(sources: Vec<LoadedSource>) -> Vec<CheckedSource> {
    sources
        .into_iter()
        .map(|source| CheckedSource {
            outcome: check(&source.file),
            path: source.path,
        })
        .collect()
}

/// Diagnostics of every failing source, one blank line between blocks.
pub fn render_text(checked: &[CheckedSource], color: bool) -> String {
    checked
        .iter()
        .filter(|c| !c.outcome.is_valid())
        .map(|c| {
            c.outcome
                .diagnostics()
                .render_colored(Some(&c.path), color)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    unused: Option<&'a ImportValidationFailure>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'static str,
    subject: Option<&'a str>,
    message: &'a str,
    notes: &'a [String],
    hints: &'a [String],
}

pub fn render_json(checked: &[CheckedSource]) -> serde_json::Result<String> {
    let files: Vec<JsonFile<'_>> = checked
        .iter()
        .map(|c| JsonFile {
            path: &c.path,
            valid: c.outcome.is_valid(),
            unused: c.outcome.failure(),
            diagnostics: c
                .outcome
                .diagnostics()
                .iter()
                .map(|d| JsonDiagnostic {
                    code: d.kind().code(),
                    subject: d.subject(),
                    message: d.message(),
                    notes: d.notes(),
                    hints: d.hints(),
                })
                .collect(),
        })
        .collect();

    let report = JsonReport {
        valid: files.iter().all(|f| f.valid),
        files,
    };
    serde_json::to_string_pretty(&report)
}
