//! Semantic analysis passes.
//!
//! - Reference collection (refs)
//! - Semantic validation (validation)

pub mod refs;
pub mod validation;

#[cfg(test)]
mod refs_tests;

pub use refs::{Site, UnscannedReference, UsedReferences, collect_references, unscanned_references};
pub use validation::{ImportValidationFailure, reconcile, validate_imports};
