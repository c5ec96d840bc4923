//! Invariant checks excluded from coverage reports.
//!
//! `expect_*` extractors are for call sites that already classified the node.
//! A mismatch means a variant was added without updating the caller.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::definitions::{
    AliasDefinition, EnumDefinition, ObjectDefinition, TypeDefinition, UnionDefinition,
};
use crate::types::{ForeignReference, LocalReference, TypeNode};

impl TypeNode {
    pub fn expect_local_reference(&self) -> &LocalReference {
        self.as_local_reference().unwrap_or_else(|| {
            panic!(
                "TypeNode: expected local-reference, found {} `{self}`",
                self.kind_name()
            )
        })
    }

    pub fn expect_foreign_reference(&self) -> &ForeignReference {
        self.as_foreign_reference().unwrap_or_else(|| {
            panic!(
                "TypeNode: expected foreign-reference, found {} `{self}`",
                self.kind_name()
            )
        })
    }
}

impl TypeDefinition {
    pub fn expect_object(&self) -> &ObjectDefinition {
        self.as_object().unwrap_or_else(|| {
            panic!("TypeDefinition: expected object, found {}", self.kind_name())
        })
    }

    pub fn expect_union(&self) -> &UnionDefinition {
        self.as_union().unwrap_or_else(|| {
            panic!("TypeDefinition: expected union, found {}", self.kind_name())
        })
    }

    pub fn expect_alias(&self) -> &AliasDefinition {
        self.as_alias().unwrap_or_else(|| {
            panic!("TypeDefinition: expected alias, found {}", self.kind_name())
        })
    }

    pub fn expect_enum(&self) -> &EnumDefinition {
        self.as_enum().unwrap_or_else(|| {
            panic!("TypeDefinition: expected enum, found {}", self.kind_name())
        })
    }
}
