//! clarify — rewrites TypeScript compiler diagnostics into clearer
//! messages, with "did you mean?" suggestions for likely misspellings.
//!
//! The engine is a pure transformation over one diagnostic at a time:
//! a read-only rule registry is built once, and `Translator::translate`
//! matches each message against its code's skeleton, extracts the
//! embedded identifiers, and renders a rewritten message. Anything that
//! cannot be translated passes through unchanged.

mod detail;
pub mod diagnostic;
pub mod ingest;
pub mod parser;
pub mod pattern;
pub mod registry;
pub mod render;
pub mod rule;
pub mod rules;
pub mod suggest;
pub mod translator;

pub use diagnostic::{
    DiagnosticContext, Position, RawDiagnostic, Severity, Span, Suggestion, TranslatedDiagnostic,
};
pub use registry::{Registry, RegistryError};
pub use rule::{ContextField, DetailSpec, RuleSpec, SuggestSpec};
pub use rules::BUILTIN_RULES;
pub use suggest::suggest;
pub use translator::Translator;
