//! Import declarations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::TypeNode;

/// A whole foreign source file imported under a namespace.
///
/// Encoded as the bare path string of the imported file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceImport {
    path: String,
}

impl NamespaceImport {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A single type provided by the target language rather than the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalTypeImport {
    /// Wire representation used by generators without a binding for the type.
    pub base_type: TypeNode,
    /// Target language → fully qualified type (e.g. `java` → `com.example.Id`).
    #[serde(default)]
    pub external: IndexMap<String, String>,
}

impl ExternalTypeImport {
    pub fn new(base_type: TypeNode) -> Self {
        Self {
            base_type,
            external: IndexMap::new(),
        }
    }

    pub fn binding(&self, language: &str) -> Option<&str> {
        self.external.get(language).map(String::as_str)
    }
}
