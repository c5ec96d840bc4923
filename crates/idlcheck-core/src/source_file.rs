//! The unit under validation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::definitions::TypeDefinition;
use crate::imports::{ExternalTypeImport, NamespaceImport};
use crate::names::{Namespace, TypeName};
use crate::services::ServiceDefinition;

/// One parsed IDL source file: its services, type definitions and imports.
///
/// All maps keep declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceFile {
    #[serde(default)]
    pub services: IndexMap<String, ServiceDefinition>,
    #[serde(default)]
    pub type_definitions: IndexMap<TypeName, TypeDefinition>,
    #[serde(default)]
    pub namespace_imports: IndexMap<Namespace, NamespaceImport>,
    #[serde(default)]
    pub external_type_imports: IndexMap<TypeName, ExternalTypeImport>,
}

impl SourceFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_imports(&self) -> bool {
        !self.namespace_imports.is_empty() || !self.external_type_imports.is_empty()
    }

    /// Number of endpoints across all services.
    pub fn endpoint_count(&self) -> usize {
        self.services.values().map(|s| s.endpoints.len()).sum()
    }
}
