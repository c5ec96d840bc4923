//! Bare-or-full decoding for fields and arguments.
//!
//! A field or argument is either a bare type expression or an object with a
//! `"type"` key plus metadata. The `"type"` key decides the form, so a bad
//! type expression surfaces its own error instead of a generic mismatch.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::TypeNode;

pub(crate) enum BareOrFull<F> {
    Bare(TypeNode),
    Full(F),
}

impl<'de, F: DeserializeOwned> Deserialize<'de> for BareOrFull<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let is_full = value
            .as_object()
            .is_some_and(|object| object.contains_key("type"));

        if is_full {
            F::deserialize(value).map(Self::Full).map_err(D::Error::custom)
        } else {
            TypeNode::deserialize(value)
                .map(Self::Bare)
                .map_err(D::Error::custom)
        }
    }
}
