use std::fmt;

/// Diagnostic kinds produced by the import checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// A namespace import with no foreign reference through it.
    UnusedNamespaceImport,
    /// An external type import with no local reference to it.
    UnusedExternalTypeImport,
}

impl DiagnosticKind {
    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnusedNamespaceImport | Self::UnusedExternalTypeImport => Some(
                "only top-level argument, field, union member and alias types count as usage",
            ),
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnusedNamespaceImport => "unused namespace import",
            Self::UnusedExternalTypeImport => "unused external type import",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> &'static str {
        match self {
            Self::UnusedNamespaceImport => "namespace `{}` is imported but never used",
            Self::UnusedExternalTypeImport => "external type `{}` is imported but never used",
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }

    /// Stable machine-readable code, used in JSON reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnusedNamespaceImport => "unused-namespace-import",
            Self::UnusedExternalTypeImport => "unused-external-type-import",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The offending import key, when the message was built from one.
    pub(crate) subject: Option<String>,
    pub(crate) message: String,
    pub(crate) notes: Vec<String>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            subject: None,
            message: kind.fallback_message().to_string(),
            notes: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Note and help lines, one per line.
    pub(crate) fn format_details(&self, w: &mut impl fmt::Write) -> fmt::Result {
        for note in &self.notes {
            writeln!(w, "  = note: {note}")?;
        }
        for hint in &self.hints {
            writeln!(w, "  = help: {hint}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)?;
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for hint in &self.hints {
            write!(f, "\n  = help: {hint}")?;
        }
        Ok(())
    }
}
