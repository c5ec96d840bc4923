use idlcheck_core::{ForeignReference, LocalReference, PrimitiveKind, SourceFile, TypeNode};

use super::refs::{Site, collect_references, unscanned_references};
use crate::test_utils::SourceFileBuilder;

fn string() -> TypeNode {
    TypeNode::primitive(PrimitiveKind::String)
}

#[test]
fn empty_source_file_yields_empty_sets() {
    let used = collect_references(&SourceFile::new());

    assert!(used.is_empty());
    assert!(used.namespaces().is_empty());
    assert!(used.type_names().is_empty());
}

#[test]
fn collect_from_endpoint_arguments() {
    let file = SourceFileBuilder::new()
        .arg("Svc", "get", "id", TypeNode::local("Id"))
        .arg("Svc", "get", "token", TypeNode::foreign("auth", "Token"))
        .arg("Svc", "get", "limit", TypeNode::primitive(PrimitiveKind::Integer))
        .build();

    let used = collect_references(&file);

    assert!(used.local().contains(&LocalReference::new("Id")));
    assert!(used.foreign().contains(&ForeignReference::new("auth", "Token")));
    assert_eq!(used.local().len(), 1);
    assert_eq!(used.foreign().len(), 1);
}

#[test]
fn collect_from_every_definition_kind() {
    let file = SourceFileBuilder::new()
        .field("Dataset", "owner", TypeNode::foreign("common", "User"))
        .field("Dataset", "name", string())
        .member("Shape", "circle", TypeNode::local("Circle"))
        .alias("When", TypeNode::foreign("time", "Instant"))
        .enumeration("Color", &["RED", "BLUE"])
        .build();

    let used = collect_references(&file);

    let namespaces: Vec<String> = used.namespaces().iter().map(|n| n.to_string()).collect();
    assert_eq!(namespaces, ["common", "time"]);
    let names: Vec<String> = used.type_names().iter().map(|n| n.to_string()).collect();
    assert_eq!(names, ["Circle"]);
}

#[test]
fn collect_deduplicates() {
    let file = SourceFileBuilder::new()
        .field("A", "x", TypeNode::foreign("ns1", "Foo"))
        .field("B", "y", TypeNode::foreign("ns1", "Foo"))
        .field("C", "z", TypeNode::foreign("ns1", "Bar"))
        .build();

    let used = collect_references(&file);

    assert_eq!(used.foreign().len(), 2);
    assert_eq!(used.namespaces().len(), 1);
}

#[test]
fn containers_are_not_descended_into() {
    let file = SourceFileBuilder::new()
        .arg("Svc", "put", "items", TypeNode::list(TypeNode::foreign("ns1", "Foo")))
        .field("A", "s", TypeNode::set(TypeNode::local("Bar")))
        .field("A", "m", TypeNode::map(string(), TypeNode::local("Baz")))
        .member("U", "o", TypeNode::optional(TypeNode::foreign("ns2", "Qux")))
        .alias("L", TypeNode::list(TypeNode::local("Quux")))
        .build();

    assert!(collect_references(&file).is_empty());
}

#[test]
fn return_types_are_not_scanned() {
    let file = SourceFileBuilder::new()
        .returns("Svc", "get", TypeNode::foreign("ns1", "Foo"))
        .build();

    assert!(collect_references(&file).is_empty());
}

#[test]
fn collection_does_not_mutate_input() {
    let file = SourceFileBuilder::new()
        .namespace_import("ns1")
        .arg("Svc", "get", "x", TypeNode::foreign("ns1", "Foo"))
        .build();
    let before = file.clone();

    let first = collect_references(&file);
    let second = collect_references(&file);

    assert_eq!(file, before);
    assert_eq!(first, second);
}

#[test]
fn unscanned_covers_containers_and_return_types() {
    let file = SourceFileBuilder::new()
        .arg("Svc", "get", "id", TypeNode::foreign("ns1", "Direct"))
        .arg("Svc", "put", "items", TypeNode::list(TypeNode::foreign("ns1", "Foo")))
        .returns("Svc", "get", TypeNode::optional(TypeNode::local("Bar")))
        .field("A", "m", TypeNode::map(TypeNode::local("K"), TypeNode::local("V")))
        .build();

    let found = unscanned_references(&file);
    let rendered: Vec<String> = found
        .iter()
        .map(|u| format!("{} in {}", u.reference, u.site))
        .collect();

    assert_eq!(
        rendered,
        [
            "Bar in return type of `Svc.get`",
            "ns1.Foo in argument `items` of `Svc.put`",
            "K in field `A.m`",
            "V in field `A.m`",
        ]
    );
}

#[test]
fn unscanned_skips_top_level_references() {
    let file = SourceFileBuilder::new()
        .field("A", "x", TypeNode::local("Bar"))
        .alias("B", TypeNode::foreign("ns1", "Foo"))
        .build();

    assert!(unscanned_references(&file).is_empty());
}

#[test]
fn unscanned_top_level_return_type_is_its_own_declaration() {
    let file = SourceFileBuilder::new()
        .returns("Svc", "get", TypeNode::foreign("ns1", "Foo"))
        .build();

    let found = unscanned_references(&file);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].declared, found[0].reference);
    assert_eq!(
        found[0].site,
        Site::Returns {
            service: "Svc",
            endpoint: "get"
        }
    );
}
