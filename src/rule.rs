//! Rule types.
//!
//! A `RuleSpec` is one row of the static rule table: the codes it claims,
//! the skeleton its messages follow, the rewritten message template, an
//! optional hint, and an optional suggestion directive. `Registry::build`
//! compiles specs into `Rule`s exactly once.

use crate::diagnostic::DiagnosticContext;
use crate::pattern::Pattern;

/// Which context field supplies suggestion candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextField {
    Members,
    NamesInScope,
    Modules,
}

impl ContextField {
    pub fn candidates<'a>(&self, context: &'a DiagnosticContext) -> &'a [String] {
        match self {
            ContextField::Members => &context.members,
            ContextField::NamesInScope => &context.names_in_scope,
            ContextField::Modules => &context.modules,
        }
    }
}

/// Directive attached to a rule that offers a "did you mean" correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestSpec {
    /// The captured token to treat as a misspelled identifier.
    pub token: &'static str,
    /// Where the candidate set comes from.
    pub source: ContextField,
    /// Clause appended to the message on a hit. May reference the
    /// pattern's tokens plus `{suggestion}` for the chosen candidate.
    pub clause: &'static str,
    /// Maximum edit distance for a candidate to qualify.
    pub max_distance: usize,
}

/// Default clause and threshold used by most suggesting rules.
pub const DID_YOU_MEAN: &str = "Did you mean '{suggestion}'?";
pub const DEFAULT_MAX_DISTANCE: usize = 2;

impl SuggestSpec {
    pub const fn new(token: &'static str, source: ContextField) -> Self {
        Self {
            token,
            source,
            clause: DID_YOU_MEAN,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

/// Directive attached to a rule that inspects captured text beyond plain
/// substitution. Runs after a successful parse and appends extra sentences
/// to the rewritten message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSpec {
    /// When both tokens captured object-literal types, report each property
    /// whose provided type differs from the expected one.
    PropertyMismatches {
        found: &'static str,
        expected: &'static str,
    },
}

impl DetailSpec {
    /// Tokens the directive reads from the capture set.
    pub fn tokens(&self) -> [&'static str; 2] {
        match *self {
            DetailSpec::PropertyMismatches { found, expected } => [found, expected],
        }
    }
}

/// One row of the static rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    /// Error codes this rule claims. A small family of codes may share one
    /// skeleton; no code may be claimed by two rules.
    pub codes: &'static [&'static str],
    /// Skeleton of the checker's message, with `{token}` captures.
    pub pattern: &'static str,
    /// Rewritten message. May only reference the pattern's tokens.
    pub template: &'static str,
    /// Optional actionable hint, templated the same way.
    pub hint: Option<&'static str>,
    /// Optional "did you mean" directive.
    pub suggest: Option<SuggestSpec>,
    /// Optional post-capture analysis directive.
    pub detail: Option<DetailSpec>,
}

/// A validated, compiled rule as held by the registry.
#[derive(Debug, Clone)]
pub struct Rule {
    pub codes: &'static [&'static str],
    pub pattern: Pattern,
    pub template: &'static str,
    pub hint: Option<&'static str>,
    pub suggest: Option<SuggestSpec>,
    pub detail: Option<DetailSpec>,
}
