//! Semantic validation passes.
//!
//! - Unused imports (imports)

pub mod imports;


pub use imports::{ImportValidationFailure, reconcile, validate_imports};
