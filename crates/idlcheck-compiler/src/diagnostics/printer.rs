//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{Group, Level, Origin, Renderer};

use super::Diagnostics;
use super::message::DiagnosticMessage;

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d, 'p> {
    diagnostics: &'d Diagnostics,
    path: Option<&'p str>,
    colored: bool,
}

impl<'d, 'p> DiagnosticsPrinter<'d, 'p> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            path: None,
            colored: false,
        }
    }

    /// Source file the diagnostics belong to, shown under each headline.
    pub fn path(mut self, path: &'p str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    /// Writes one block per diagnostic, separated by blank lines.
    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if !self.colored {
            return self.format_plain(w);
        }

        let renderer = Renderer::styled();
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            let report = [self.group(diag)];
            writeln!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    fn group<'a>(&'a self, diag: &'a DiagnosticMessage) -> Group<'a> {
        let mut group = Group::with_title(Level::ERROR.primary_title(diag.message()));
        if let Some(path) = self.path {
            group = group.element(Origin::path(path));
        }
        for note in diag.notes() {
            group = group.element(Level::NOTE.message(note.as_str()));
        }
        for hint in diag.hints() {
            group = group.element(Level::HELP.message(hint.as_str()));
        }
        group
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            match self.path {
                Some(path) => {
                    writeln!(w, "error: {}", diag.message())?;
                    writeln!(w, "  --> {}", path)?;
                    diag.format_details(w)?;
                }
                None => writeln!(w, "{}", diag)?,
            }
        }
        Ok(())
    }
}
