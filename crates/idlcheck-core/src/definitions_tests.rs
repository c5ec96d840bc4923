use indexmap::IndexMap;

use crate::{
    AliasDefinition, EnumDefinition, EnumValue, FieldDefinition, ObjectDefinition, TypeDefinition,
    TypeNode, UnionDefinition,
};

fn object() -> TypeDefinition {
    let mut fields = IndexMap::new();
    fields.insert("id".to_string(), FieldDefinition::new(TypeNode::local("Id")));
    TypeDefinition::Object(ObjectDefinition { fields, docs: None })
}

fn alias() -> TypeDefinition {
    TypeDefinition::Alias(AliasDefinition {
        alias: TypeNode::foreign("ns1", "Foo"),
        docs: None,
    })
}

#[test]
fn each_variant_matches_only_its_own_predicate() {
    let defs = [
        object(),
        TypeDefinition::Union(UnionDefinition::default()),
        alias(),
        TypeDefinition::Enum(EnumDefinition::default()),
    ];

    let flags: Vec<[bool; 4]> = defs
        .iter()
        .map(|d| [d.is_object(), d.is_union(), d.is_alias(), d.is_enum()])
        .collect();

    assert_eq!(
        flags,
        vec![
            [true, false, false, false],
            [false, true, false, false],
            [false, false, true, false],
            [false, false, false, true],
        ]
    );
}

#[test]
fn extractors_return_payload() {
    let obj = object();
    assert_eq!(obj.as_object().unwrap().fields.len(), 1);
    assert!(obj.as_alias().is_none());

    let alias = alias();
    assert_eq!(alias.expect_alias().alias, TypeNode::foreign("ns1", "Foo"));
    assert!(alias.as_union().is_none());

    let en = TypeDefinition::Enum(EnumDefinition {
        values: vec![EnumValue {
            value: "RED".to_string(),
            docs: None,
        }],
        docs: None,
    });
    assert_eq!(en.expect_enum().values[0].value, "RED");
}

#[test]
#[should_panic(expected = "TypeDefinition: expected union, found object")]
fn expect_union_on_object_panics() {
    object().expect_union();
}

#[test]
#[should_panic(expected = "TypeDefinition: expected object, found alias")]
fn expect_object_on_alias_panics() {
    alias().expect_object();
}
