//! Type definitions declared in a source file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::shorthand::BareOrFull;
use crate::types::TypeNode;

/// A named type declared by a source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeDefinition {
    Object(ObjectDefinition),
    Union(UnionDefinition),
    Alias(AliasDefinition),
    Enum(EnumDefinition),
}

impl TypeDefinition {
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, Self::Alias(_))
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    pub fn as_object(&self) -> Option<&ObjectDefinition> {
        match self {
            Self::Object(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionDefinition> {
        match self {
            Self::Union(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_alias(&self) -> Option<&AliasDefinition> {
        match self {
            Self::Alias(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDefinition> {
        match self {
            Self::Enum(def) => Some(def),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Union(_) => "union",
            Self::Alias(_) => "alias",
            Self::Enum(_) => "enum",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectDefinition {
    #[serde(default)]
    pub fields: IndexMap<String, FieldDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

/// Tagged union. Exactly one member is set at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnionDefinition {
    #[serde(default)]
    pub members: IndexMap<String, FieldDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasDefinition {
    pub alias: TypeNode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumDefinition {
    #[serde(default)]
    pub values: Vec<EnumValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

/// Object field or union member.
///
/// Accepts either a bare type expression or `{ "type": ..., "docs": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BareOrFull<FullField>")]
pub struct FieldDefinition {
    #[serde(rename = "type")]
    pub type_node: TypeNode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

impl FieldDefinition {
    pub fn new(type_node: TypeNode) -> Self {
        Self {
            type_node,
            docs: None,
            deprecated: None,
        }
    }
}

#[derive(Deserialize)]
struct FullField {
    #[serde(rename = "type")]
    type_node: TypeNode,
    #[serde(default)]
    docs: Option<String>,
    #[serde(default)]
    deprecated: Option<String>,
}

impl From<BareOrFull<FullField>> for FieldDefinition {
    fn from(raw: BareOrFull<FullField>) -> Self {
        match raw {
            BareOrFull::Bare(type_node) => Self::new(type_node),
            BareOrFull::Full(FullField {
                type_node,
                docs,
                deprecated,
            }) => Self {
                type_node,
                docs,
                deprecated,
            },
        }
    }
}
