//! Diagnostic data model.
//!
//! Input and output units of the engine, plus terminal rendering for the
//! translated form. All boundary types are serde-serializable because the
//! editor-side integration exchanges diagnostics as structured data.

use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl Severity {
    /// Label used in rendered headers.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
            Severity::Help => "help",
        }
    }
}

/// 1-based line, 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Structured context a caller may attach to a diagnostic. Every field is
/// optional in spirit: an empty vector simply disables the suggestions
/// that would have drawn candidates from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticContext {
    /// Member names of the type under inspection.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
    /// Identifiers visible in the enclosing scope.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names_in_scope: Vec<String>,
    /// Module specifiers the checker can resolve.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<String>,
}

impl DiagnosticContext {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.names_in_scope.is_empty() && self.modules.is_empty()
    }
}

/// One diagnostic as produced by the external checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDiagnostic {
    pub code: String,
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    #[serde(default, skip_serializing_if = "DiagnosticContext::is_empty")]
    pub context: DiagnosticContext,
}

impl RawDiagnostic {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: Severity::Error,
            file: None,
            span: None,
            context: DiagnosticContext::default(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_context(mut self, context: DiagnosticContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context.members = members.into_iter().map(Into::into).collect();
        self
    }
}

/// A proposed correction for a likely misspelled identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub candidate: String,
    pub distance: usize,
}

/// One diagnostic after translation. Code, severity, file and span are the
/// input's values untouched; only message, hint and suggestion are new.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedDiagnostic {
    pub code: String,
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl TranslatedDiagnostic {
    /// Passthrough: the input's fields carried over verbatim, no hint and
    /// no suggestion.
    pub fn passthrough(raw: &RawDiagnostic) -> Self {
        Self {
            code: raw.code.clone(),
            message: raw.message.clone(),
            severity: raw.severity,
            file: raw.file.clone(),
            span: raw.span,
            hint: None,
            suggestion: None,
        }
    }

    /// Render for terminal display.
    ///
    /// Header: `-- error: message [TS2551]`, then a `--> file:line:column`
    /// locator when position is known, then a `Hint:` section.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let use_color = env::var_os("NO_COLOR").is_none();
        let yellow = "\u{1b}[33m";
        let reset = "\u{1b}[0m";

        if use_color {
            out.push_str(yellow);
        }
        out.push_str(&format!(
            "-- {}[{}]\n",
            self.severity.label(),
            self.code
        ));
        if use_color {
            out.push_str(reset);
        }

        out.push('\n');
        out.push_str(&self.message);
        out.push('\n');

        if let Some(span) = self.span {
            let file = self.file.as_deref().unwrap_or("<unknown>");
            out.push('\n');
            out.push_str(&format!(
                "  --> {}:{}:{}\n",
                file,
                span.start.line,
                span.start.column + 1
            ));
        }

        if let Some(hint) = &self.hint {
            out.push_str("\nHint:\n");
            out.push_str(&format!("  {}\n", hint));
        }

        out
    }
}
