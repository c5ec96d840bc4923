//! idlcheck compiler: semantic validation of parsed IDL source files.
//!
//! This crate provides the validation pipeline:
//! - `analyze` - reference collection and unused-import detection
//! - `diagnostics` - error reporting
//! - `check` - high-level facade running every check over one file

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod check;
pub mod diagnostics;

#[cfg(test)]
pub mod test_utils;

pub use analyze::{ImportValidationFailure, UsedReferences, collect_references, validate_imports};
pub use check::{CheckOutcome, check, check_json};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};

/// Errors that can occur while checking a source file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file declares imports it never uses.
    #[error(transparent)]
    ImportValidation(#[from] ImportValidationFailure),

    /// The JSON hand-off could not be decoded into a source file.
    #[error("failed to decode source file: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for check operations.
pub type Result<T> = std::result::Result<T, Error>;
