//! Reference collection over a source file.
//!
//! [`collect_references`] decides what counts as usage of an import: the
//! outermost type expression of every endpoint argument, object field, union
//! member and alias target. Container element types and endpoint return types
//! are not part of that scan.
//!
//! [`unscanned_references`] walks exactly the places the collector skips. It is
//! only used to explain a failure and never changes the outcome.

use std::fmt;

use indexmap::IndexSet;
use tracing::{debug, trace};

use idlcheck_core::{
    ForeignReference, LocalReference, Namespace, SourceFile, TypeDefinition, TypeName, TypeNode,
};

/// References used by a source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedReferences {
    local: IndexSet<LocalReference>,
    foreign: IndexSet<ForeignReference>,
}

impl UsedReferences {
    pub fn local(&self) -> &IndexSet<LocalReference> {
        &self.local
    }

    pub fn foreign(&self) -> &IndexSet<ForeignReference> {
        &self.foreign
    }

    /// Namespaces of all used foreign references.
    pub fn namespaces(&self) -> IndexSet<&Namespace> {
        self.foreign.iter().map(ForeignReference::namespace).collect()
    }

    /// Type names of all used local references.
    pub fn type_names(&self) -> IndexSet<&TypeName> {
        self.local.iter().map(LocalReference::type_name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.foreign.is_empty()
    }

    /// Record `node` if its own tag is a reference.
    fn add_if_reference(&mut self, node: &TypeNode) {
        match node {
            TypeNode::LocalReference(reference) => {
                trace!(reference = %node, "local reference");
                self.local.insert(reference.clone());
            }
            TypeNode::ForeignReference(reference) => {
                trace!(reference = %node, "foreign reference");
                self.foreign.insert(reference.clone());
            }
            // Containers are classified by their own tag only.
            TypeNode::Any
            | TypeNode::Primitive(_)
            | TypeNode::List(_)
            | TypeNode::Set(_)
            | TypeNode::Map { .. }
            | TypeNode::Optional(_)
            | TypeNode::Binary
            | TypeNode::DateTime => {}
        }
    }
}

/// Collect the references a source file uses.
///
/// Pure and total: an empty source file yields two empty sets.
pub fn collect_references(file: &SourceFile) -> UsedReferences {
    let mut used = UsedReferences::default();

    for service in file.services.values() {
        for endpoint in service.endpoints.values() {
            for arg in endpoint.args.values() {
                used.add_if_reference(&arg.type_node);
            }
        }
    }

    for def in file.type_definitions.values() {
        match def {
            TypeDefinition::Object(object) => {
                for field in object.fields.values() {
                    used.add_if_reference(&field.type_node);
                }
            }
            TypeDefinition::Union(union) => {
                for member in union.members.values() {
                    used.add_if_reference(&member.type_node);
                }
            }
            TypeDefinition::Alias(alias) => used.add_if_reference(&alias.alias),
            TypeDefinition::Enum(_) => {}
        }
    }

    debug!(
        local = used.local.len(),
        foreign = used.foreign.len(),
        "collected references"
    );
    used
}

/// Where a type expression is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Site<'a> {
    Argument {
        service: &'a str,
        endpoint: &'a str,
        arg: &'a str,
    },
    Returns {
        service: &'a str,
        endpoint: &'a str,
    },
    Field {
        def: &'a TypeName,
        field: &'a str,
    },
    UnionMember {
        def: &'a TypeName,
        member: &'a str,
    },
    AliasTarget {
        def: &'a TypeName,
    },
}

impl fmt::Display for Site<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument {
                service,
                endpoint,
                arg,
            } => write!(f, "argument `{arg}` of `{service}.{endpoint}`"),
            Self::Returns { service, endpoint } => {
                write!(f, "return type of `{service}.{endpoint}`")
            }
            Self::Field { def, field } => write!(f, "field `{def}.{field}`"),
            Self::UnionMember { def, member } => write!(f, "union member `{def}.{member}`"),
            Self::AliasTarget { def } => write!(f, "alias `{def}`"),
        }
    }
}

/// A reference the collector does not see, with the declaration it sits in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnscannedReference<'a> {
    pub site: Site<'a>,
    /// The full type expression declared at `site`.
    pub declared: &'a TypeNode,
    /// The reference found inside `declared`.
    pub reference: &'a TypeNode,
}

/// Find references nested inside containers or declared as endpoint return types.
pub fn unscanned_references(file: &SourceFile) -> Vec<UnscannedReference<'_>> {
    let mut found = Vec::new();

    for (service_name, service) in &file.services {
        for (endpoint_name, endpoint) in &service.endpoints {
            for (arg_name, arg) in &endpoint.args {
                let site = Site::Argument {
                    service: service_name,
                    endpoint: endpoint_name,
                    arg: arg_name,
                };
                push_nested(&mut found, site, &arg.type_node);
            }
            if let Some(returns) = &endpoint.returns {
                let site = Site::Returns {
                    service: service_name,
                    endpoint: endpoint_name,
                };
                push_all(&mut found, &site, returns, returns);
            }
        }
    }

    for (def_name, def) in &file.type_definitions {
        match def {
            TypeDefinition::Object(object) => {
                for (field_name, field) in &object.fields {
                    let site = Site::Field {
                        def: def_name,
                        field: field_name,
                    };
                    push_nested(&mut found, site, &field.type_node);
                }
            }
            TypeDefinition::Union(union) => {
                for (member_name, member) in &union.members {
                    let site = Site::UnionMember {
                        def: def_name,
                        member: member_name,
                    };
                    push_nested(&mut found, site, &member.type_node);
                }
            }
            TypeDefinition::Alias(alias) => {
                push_nested(&mut found, Site::AliasTarget { def: def_name }, &alias.alias);
            }
            TypeDefinition::Enum(_) => {}
        }
    }

    found
}

/// References strictly below the top level of `declared`.
fn push_nested<'a>(
    out: &mut Vec<UnscannedReference<'a>>,
    site: Site<'a>,
    declared: &'a TypeNode,
) {
    for child in children(declared) {
        push_all(out, &site, declared, child);
    }
}

/// References at or below `node`.
fn push_all<'a>(
    out: &mut Vec<UnscannedReference<'a>>,
    site: &Site<'a>,
    declared: &'a TypeNode,
    node: &'a TypeNode,
) {
    if node.is_local_reference() || node.is_foreign_reference() {
        out.push(UnscannedReference {
            site: site.clone(),
            declared,
            reference: node,
        });
        return;
    }
    for child in children(node) {
        push_all(out, site, declared, child);
    }
}

fn children(node: &TypeNode) -> Vec<&TypeNode> {
    match node {
        TypeNode::List(element) | TypeNode::Set(element) | TypeNode::Optional(element) => {
            vec![&**element]
        }
        TypeNode::Map { key, value } => vec![&**key, &**value],
        TypeNode::Any
        | TypeNode::Primitive(_)
        | TypeNode::Binary
        | TypeNode::DateTime
        | TypeNode::LocalReference(_)
        | TypeNode::ForeignReference(_) => Vec::new(),
    }
}
