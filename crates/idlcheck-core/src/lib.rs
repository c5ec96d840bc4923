#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for idlcheck.
//!
//! Models one already-parsed IDL source file:
//! - **Names**: `Namespace` and `TypeName` identifier newtypes
//! - **Type expressions**: the closed `TypeNode` sum type and its classifiers
//! - **Definitions**: objects, unions, aliases and enums
//! - **Services**: endpoints and their arguments
//! - **Imports**: namespace imports and external type imports
//!
//! The deserialization layer reads the JSON hand-off produced by the upstream
//! parser (see [`parse_source_file`]).

pub mod definitions;
pub mod imports;
mod invariants;
pub mod names;
pub mod services;
mod shorthand;
pub mod source_file;
pub mod types;

#[cfg(test)]
mod definitions_tests;

pub use definitions::{
    AliasDefinition, EnumDefinition, EnumValue, FieldDefinition, ObjectDefinition, TypeDefinition,
    UnionDefinition,
};
pub use imports::{ExternalTypeImport, NamespaceImport};
pub use names::{Namespace, TypeName};
pub use services::{ArgumentDefinition, EndpointDefinition, ParamType, ServiceDefinition};
pub use source_file::SourceFile;
pub use types::{ForeignReference, LocalReference, PrimitiveKind, TypeNode};

/// Parse a JSON-encoded source file.
pub fn parse_source_file(json: &str) -> Result<SourceFile, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse a JSON-encoded source file from a reader.
pub fn read_source_file(reader: impl std::io::Read) -> Result<SourceFile, serde_json::Error> {
    serde_json::from_reader(reader)
}
