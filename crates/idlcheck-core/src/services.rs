//! Service and endpoint declarations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::shorthand::BareOrFull;
use crate::types::TypeNode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default)]
    pub endpoints: IndexMap<String, EndpointDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EndpointDefinition {
    /// HTTP line, e.g. `GET /datasets/{id}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<String>,
    #[serde(default)]
    pub args: IndexMap<String, ArgumentDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<TypeNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

/// Where an endpoint argument travels in the HTTP request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    Body,
    Path,
    Query,
    Header,
}

/// Endpoint argument.
///
/// Accepts either a bare type expression or a full argument object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BareOrFull<FullArgument>", rename_all = "kebab-case")]
pub struct ArgumentDefinition {
    #[serde(rename = "type")]
    pub type_node: TypeNode,
    pub param_type: ParamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

impl ArgumentDefinition {
    pub fn new(type_node: TypeNode) -> Self {
        Self {
            type_node,
            param_type: ParamType::default(),
            docs: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct FullArgument {
    #[serde(rename = "type")]
    type_node: TypeNode,
    #[serde(default)]
    param_type: ParamType,
    #[serde(default)]
    docs: Option<String>,
}

impl From<BareOrFull<FullArgument>> for ArgumentDefinition {
    fn from(raw: BareOrFull<FullArgument>) -> Self {
        match raw {
            BareOrFull::Bare(type_node) => Self::new(type_node),
            BareOrFull::Full(FullArgument {
                type_node,
                param_type,
                docs,
            }) => Self {
                type_node,
                param_type,
                docs,
            },
        }
    }
}
