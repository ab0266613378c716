//! Translator.
//!
//! The public entry point: lookup → parse → (suggest) → render, with an
//! early exit to passthrough whenever a step cannot proceed. `translate`
//! is total; no per-call condition surfaces as a failure.

use log::{debug, trace};
use rayon::prelude::*;

use crate::diagnostic::{RawDiagnostic, TranslatedDiagnostic};
use crate::parser::parse;
use crate::registry::{Registry, RegistryError};
use crate::render::render;
use crate::rule::RuleSpec;
use crate::suggest::suggest;

#[derive(Debug, Clone)]
pub struct Translator {
    registry: Registry,
}

impl Translator {
    /// Translator over the builtin tsc rule table.
    pub fn new() -> Result<Self, RegistryError> {
        Ok(Self {
            registry: Registry::builtin()?,
        })
    }

    /// Translator over a caller-supplied rule table.
    pub fn with_rules(specs: &[RuleSpec]) -> Result<Self, RegistryError> {
        Ok(Self {
            registry: Registry::build(specs)?,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Translate one diagnostic. Never fails: unknown codes and messages
    /// that have drifted from the expected skeleton come back as
    /// passthrough with the original message intact.
    pub fn translate(&self, raw: &RawDiagnostic) -> TranslatedDiagnostic {
        let Some(rule) = self.registry.lookup(&raw.code) else {
            trace!("no rule for code {}; passing through", raw.code);
            return TranslatedDiagnostic::passthrough(raw);
        };

        let captures = match parse(&rule.pattern, &raw.message) {
            Ok(captures) => captures,
            Err(_) => {
                // The rule table expects a different skeleton for this
                // code; the log line is the signal to correct the table.
                debug!(
                    "message for {} does not match skeleton {:?}; passing through",
                    raw.code,
                    rule.pattern.source()
                );
                return TranslatedDiagnostic::passthrough(raw);
            }
        };

        // A missing or empty context field just means no suggestion.
        let suggestion = rule.suggest.as_ref().and_then(|spec| {
            let query = captures.get(spec.token)?;
            let candidates = spec.source.candidates(&raw.context);
            suggest(query, candidates, spec.max_distance)
        });

        let (message, hint) = render(rule, &captures, suggestion.as_ref());

        TranslatedDiagnostic {
            code: raw.code.clone(),
            message,
            severity: raw.severity,
            file: raw.file.clone(),
            span: raw.span,
            hint,
            suggestion,
        }
    }

    /// Translate a batch, e.g. one publish event's worth of diagnostics.
    /// `translate` reads only the immutable registry, so the batch fans
    /// out across threads with no synchronization.
    pub fn translate_all(&self, raws: &[RawDiagnostic]) -> Vec<TranslatedDiagnostic> {
        raws.par_iter().map(|raw| self.translate(raw)).collect()
    }
}
