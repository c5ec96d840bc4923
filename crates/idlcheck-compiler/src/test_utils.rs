//! Test utilities: a compact builder for source files.

use idlcheck_core::{
    AliasDefinition, ArgumentDefinition, EnumDefinition, EnumValue, ExternalTypeImport,
    FieldDefinition, Namespace, NamespaceImport, ObjectDefinition, PrimitiveKind, SourceFile,
    TypeDefinition, TypeName, TypeNode, UnionDefinition,
};

#[derive(Default)]
pub struct SourceFileBuilder {
    file: SourceFile,
}

impl SourceFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace_import(mut self, namespace: &str) -> Self {
        self.file.namespace_imports.insert(
            Namespace::new(namespace),
            NamespaceImport::new(format!("{namespace}.yml")),
        );
        self
    }

    pub fn external_import(mut self, type_name: &str) -> Self {
        self.file.external_type_imports.insert(
            TypeName::new(type_name),
            ExternalTypeImport::new(TypeNode::primitive(PrimitiveKind::String)),
        );
        self
    }

    pub fn arg(mut self, service: &str, endpoint: &str, arg: &str, ty: TypeNode) -> Self {
        self.file
            .services
            .entry(service.to_string())
            .or_default()
            .endpoints
            .entry(endpoint.to_string())
            .or_default()
            .args
            .insert(arg.to_string(), ArgumentDefinition::new(ty));
        self
    }

    pub fn returns(mut self, service: &str, endpoint: &str, ty: TypeNode) -> Self {
        self.file
            .services
            .entry(service.to_string())
            .or_default()
            .endpoints
            .entry(endpoint.to_string())
            .or_default()
            .returns = Some(ty);
        self
    }

    pub fn field(mut self, def: &str, field: &str, ty: TypeNode) -> Self {
        let entry = self
            .file
            .type_definitions
            .entry(TypeName::new(def))
            .or_insert_with(|| TypeDefinition::Object(ObjectDefinition::default()));
        let TypeDefinition::Object(object) = entry else {
            panic!("`{def}` is not an object");
        };
        object
            .fields
            .insert(field.to_string(), FieldDefinition::new(ty));
        self
    }

    pub fn member(mut self, def: &str, member: &str, ty: TypeNode) -> Self {
        let entry = self
            .file
            .type_definitions
            .entry(TypeName::new(def))
            .or_insert_with(|| TypeDefinition::Union(UnionDefinition::default()));
        let TypeDefinition::Union(union) = entry else {
            panic!("`{def}` is not a union");
        };
        union
            .members
            .insert(member.to_string(), FieldDefinition::new(ty));
        self
    }

    pub fn alias(mut self, def: &str, target: TypeNode) -> Self {
        self.file.type_definitions.insert(
            TypeName::new(def),
            TypeDefinition::Alias(AliasDefinition {
                alias: target,
                docs: None,
            }),
        );
        self
    }

    pub fn enumeration(mut self, def: &str, values: &[&str]) -> Self {
        let values = values
            .iter()
            .map(|v| EnumValue {
                value: v.to_string(),
                docs: None,
            })
            .collect();
        self.file.type_definitions.insert(
            TypeName::new(def),
            TypeDefinition::Enum(EnumDefinition { values, docs: None }),
        );
        self
    }

    pub fn build(self) -> SourceFile {
        self.file
    }
}
