//! Advisory diagnostics collected during a build.
//!
//! Diagnostics never change the produced pattern. They are only recorded
//! when warnings are enabled in [`Options`](crate::Options).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// `between(0, 1)` is the same as `optional()`.
    BetweenCouldBeOptional,
    /// `between(n, n)` is the same as `exactly(n)`.
    BetweenCouldBeExactly,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::BetweenCouldBeOptional | Self::BetweenCouldBeExactly => Severity::Warning,
        }
    }

    fn default_message(&self) -> &'static str {
        match self {
            Self::BetweenCouldBeOptional => "`.between(0, 1)` could use `.optional()` instead",
            Self::BetweenCouldBeExactly => "`.between(n, n)` could use `.exactly(n)` instead",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a diagnostic with the kind's default message and severity.
    pub fn report(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: Diagnostic {
                kind,
                severity: kind.default_severity(),
                message: kind.default_message().to_string(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    pub fn warning_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    /// One `severity: message` line per diagnostic.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for d in &self.messages {
            out.push_str(&format!("{}: {}\n", d.severity, d.message));
        }
        out
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl DiagnosticBuilder<'_> {
    /// Replace the default message.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message.message = msg.into();
        self
    }

    pub fn emit(self) {
        tracing::warn!(kind = ?self.message.kind, "{}", self.message.message);
        self.diagnostics.messages.push(self.message);
    }
}
