//! Unused-import detection.
//!
//! Compares the imports a source file declares against the references it
//! uses. Namespace imports and external type imports are checked
//! independently and both checks always run, so one pass reports every
//! unused import.

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use idlcheck_core::{Namespace, SourceFile, TypeName};

use crate::analyze::refs::{UnscannedReference, UsedReferences, collect_references};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Imports declared by a source file but never used.
///
/// At least one of the two sets is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error(
    "unused imports: {} namespace(s), {} external type(s)",
    .unused_namespaces.len(),
    .unused_external_types.len()
)]
pub struct ImportValidationFailure {
    pub unused_namespaces: IndexSet<Namespace>,
    pub unused_external_types: IndexSet<TypeName>,
}

impl ImportValidationFailure {
    /// Kinds of failure present, in reporting order.
    pub fn kinds(&self) -> impl Iterator<Item = DiagnosticKind> {
        let namespaces = (!self.unused_namespaces.is_empty())
            .then_some(DiagnosticKind::UnusedNamespaceImport);
        let external = (!self.unused_external_types.is_empty())
            .then_some(DiagnosticKind::UnusedExternalTypeImport);
        namespaces.into_iter().chain(external)
    }

    /// Report one diagnostic per unused import.
    ///
    /// `unscanned` adds a note wherever the import is referenced only from a
    /// place the collector does not look at.
    pub fn report(&self, unscanned: &[UnscannedReference<'_>], diag: &mut Diagnostics) {
        for namespace in &self.unused_namespaces {
            let mut builder = diag
                .report(DiagnosticKind::UnusedNamespaceImport)
                .message(namespace.as_str());
            let hidden = unscanned.iter().filter(|u| {
                u.reference
                    .as_foreign_reference()
                    .is_some_and(|r| r.namespace() == namespace)
            });
            for u in hidden {
                builder = builder.note(unscanned_note(u));
            }
            builder.emit();
        }

        for type_name in &self.unused_external_types {
            let mut builder = diag
                .report(DiagnosticKind::UnusedExternalTypeImport)
                .message(type_name.as_str());
            let hidden = unscanned.iter().filter(|u| {
                u.reference
                    .as_local_reference()
                    .is_some_and(|r| r.type_name() == type_name)
            });
            for u in hidden {
                builder = builder.note(unscanned_note(u));
            }
            builder.emit();
        }
    }
}

fn unscanned_note(u: &UnscannedReference<'_>) -> String {
    if u.declared == u.reference {
        format!("`{}` is used as the {}, which is not scanned", u.reference, u.site)
    } else {
        format!(
            "`{}` appears inside `{}` ({}), which does not count as usage",
            u.reference, u.declared, u.site
        )
    }
}

/// Diff declared imports against used references.
pub fn reconcile(file: &SourceFile, used: &UsedReferences) -> Result<(), ImportValidationFailure> {
    let used_namespaces = used.namespaces();
    let unused_namespaces: IndexSet<Namespace> = file
        .namespace_imports
        .keys()
        .filter(|namespace| !used_namespaces.contains(namespace))
        .cloned()
        .collect();

    let used_type_names = used.type_names();
    let unused_external_types: IndexSet<TypeName> = file
        .external_type_imports
        .keys()
        .filter(|type_name| !used_type_names.contains(type_name))
        .cloned()
        .collect();

    debug!(
        unused_namespaces = unused_namespaces.len(),
        unused_external_types = unused_external_types.len(),
        "reconciled imports"
    );

    if unused_namespaces.is_empty() && unused_external_types.is_empty() {
        return Ok(());
    }

    Err(ImportValidationFailure {
        unused_namespaces,
        unused_external_types,
    })
}

/// Fail if `file` declares any import it never uses.
pub fn validate_imports(file: &SourceFile) -> Result<(), ImportValidationFailure> {
    let used = collect_references(file);
    reconcile(file, &used)
}
