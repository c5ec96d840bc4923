//! Type expressions.
//!
//! [`TypeNode`] is the closed set of type expressions the schema language
//! allows. Classification (`is_*` / `as_*`) looks at the node's own tag only;
//! none of the predicates descend into container element types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::names::{Namespace, TypeName};

/// Built-in scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Integer,
    Double,
    Boolean,
    SafeLong,
    Rid,
    Bearertoken,
    Uuid,
}

impl PrimitiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::SafeLong => "safelong",
            Self::Rid => "rid",
            Self::Bearertoken => "bearertoken",
            Self::Uuid => "uuid",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a type imported individually, without a namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalReference {
    type_name: TypeName,
}

impl LocalReference {
    pub fn new(type_name: impl Into<TypeName>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }
}

/// Reference to a type defined in another source file, qualified by the
/// namespace that file was imported under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ForeignReference {
    namespace: Namespace,
    type_name: TypeName,
}

impl ForeignReference {
    pub fn new(namespace: impl Into<Namespace>, type_name: impl Into<TypeName>) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }
}

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeNode {
    Any,
    Primitive(PrimitiveKind),
    List(Box<TypeNode>),
    Set(Box<TypeNode>),
    Map {
        key: Box<TypeNode>,
        value: Box<TypeNode>,
    },
    Optional(Box<TypeNode>),
    Binary,
    #[serde(rename = "datetime")]
    DateTime,
    LocalReference(LocalReference),
    ForeignReference(ForeignReference),
}

impl TypeNode {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }

    pub fn list(element: TypeNode) -> Self {
        Self::List(Box::new(element))
    }

    pub fn set(element: TypeNode) -> Self {
        Self::Set(Box::new(element))
    }

    pub fn map(key: TypeNode, value: TypeNode) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn optional(inner: TypeNode) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn local(type_name: impl Into<TypeName>) -> Self {
        Self::LocalReference(LocalReference::new(type_name))
    }

    pub fn foreign(namespace: impl Into<Namespace>, type_name: impl Into<TypeName>) -> Self {
        Self::ForeignReference(ForeignReference::new(namespace, type_name))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map { .. })
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary)
    }

    pub fn is_datetime(&self) -> bool {
        matches!(self, Self::DateTime)
    }

    pub fn is_local_reference(&self) -> bool {
        matches!(self, Self::LocalReference(_))
    }

    pub fn is_foreign_reference(&self) -> bool {
        matches!(self, Self::ForeignReference(_))
    }

    /// True for `List`, `Set`, `Map` and `Optional`.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::List(_) | Self::Set(_) | Self::Map { .. } | Self::Optional(_)
        )
    }

    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Element type of a `List`.
    pub fn as_list(&self) -> Option<&TypeNode> {
        match self {
            Self::List(element) => Some(element),
            _ => None,
        }
    }

    /// Element type of a `Set`.
    pub fn as_set(&self) -> Option<&TypeNode> {
        match self {
            Self::Set(element) => Some(element),
            _ => None,
        }
    }

    /// Key and value types of a `Map`.
    pub fn as_map(&self) -> Option<(&TypeNode, &TypeNode)> {
        match self {
            Self::Map { key, value } => Some((key, value)),
            _ => None,
        }
    }

    /// Wrapped type of an `Optional`.
    pub fn as_optional(&self) -> Option<&TypeNode> {
        match self {
            Self::Optional(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_local_reference(&self) -> Option<&LocalReference> {
        match self {
            Self::LocalReference(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn as_foreign_reference(&self) -> Option<&ForeignReference> {
        match self {
            Self::ForeignReference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Short tag name of the variant, as used in the JSON encoding.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Primitive(_) => "primitive",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map { .. } => "map",
            Self::Optional(_) => "optional",
            Self::Binary => "binary",
            Self::DateTime => "datetime",
            Self::LocalReference(_) => "local-reference",
            Self::ForeignReference(_) => "foreign-reference",
        }
    }
}

/// Renders the schema language's surface syntax, e.g. `map<string, list<common.Id>>`.
impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Primitive(kind) => write!(f, "{kind}"),
            Self::List(element) => write!(f, "list<{element}>"),
            Self::Set(element) => write!(f, "set<{element}>"),
            Self::Map { key, value } => write!(f, "map<{key}, {value}>"),
            Self::Optional(inner) => write!(f, "optional<{inner}>"),
            Self::Binary => f.write_str("binary"),
            Self::DateTime => f.write_str("datetime"),
            Self::LocalReference(reference) => write!(f, "{}", reference.type_name),
            Self::ForeignReference(reference) => {
                write!(f, "{}.{}", reference.namespace, reference.type_name)
            }
        }
    }
}
