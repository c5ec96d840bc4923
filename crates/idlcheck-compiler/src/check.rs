//! Check facade: run every import check over one source file.

use tracing::{debug, debug_span};

use idlcheck_core::SourceFile;

use crate::analyze::{
    ImportValidationFailure, UsedReferences, collect_references, reconcile, unscanned_references,
};
use crate::diagnostics::Diagnostics;
use crate::{Error, Result};

/// Outcome of checking one source file.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    used: UsedReferences,
    failure: Option<ImportValidationFailure>,
    diagnostics: Diagnostics,
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    pub fn used_references(&self) -> &UsedReferences {
        &self.used
    }

    pub fn failure(&self) -> Option<&ImportValidationFailure> {
        self.failure.as_ref()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_result(self) -> Result<()> {
        match self.failure {
            Some(failure) => Err(Error::ImportValidation(failure)),
            None => Ok(()),
        }
    }
}

/// Check `file` and collect a diagnostic for every unused import.
pub fn check(file: &SourceFile) -> CheckOutcome {
    let _span = debug_span!(
        "check",
        services = file.services.len(),
        definitions = file.type_definitions.len()
    )
    .entered();

    let used = collect_references(file);
    let mut diagnostics = Diagnostics::new();

    let failure = match reconcile(file, &used) {
        Ok(()) => None,
        Err(failure) => {
            failure.report(&unscanned_references(file), &mut diagnostics);
            Some(failure)
        }
    };

    debug!(errors = diagnostics.error_count(), "check finished");
    CheckOutcome {
        used,
        failure,
        diagnostics,
    }
}

/// Decode a JSON-encoded source file and check it.
pub fn check_json(json: &str) -> Result<CheckOutcome> {
    let file = idlcheck_core::parse_source_file(json)?;
    Ok(check(&file))
}
