//! Rule registry.
//!
//! Built once at startup from a static rule table and read-only for the
//! rest of the process. All rule-table validation happens here, so a
//! broken table is a startup failure instead of a per-diagnostic surprise.

use std::collections::HashMap;

use thiserror::Error;

use crate::pattern::{Pattern, PatternError};
use crate::render::referenced_tokens;
use crate::rule::{Rule, RuleSpec};
use crate::rules::BUILTIN_RULES;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("error code {0} is claimed by two rules")]
    DuplicateCode(&'static str),
    #[error("rule for {code}: invalid capture pattern: {source}")]
    InvalidPattern {
        code: &'static str,
        source: PatternError,
    },
    #[error("rule for {code}: {place} references token `{token}`, which the pattern does not capture")]
    UnknownTemplateToken {
        code: &'static str,
        place: &'static str,
        token: String,
    },
    #[error("rule for {code}: suggestion token `{token}` is not captured by the pattern")]
    UnknownSuggestionToken {
        code: &'static str,
        token: &'static str,
    },
    #[error("rule for {code}: detail token `{token}` is not captured by the pattern")]
    UnknownDetailToken {
        code: &'static str,
        token: &'static str,
    },
    #[error("rule claims no error codes")]
    EmptyCodeList,
}

/// Immutable code → rule mapping.
#[derive(Debug, Clone)]
pub struct Registry {
    rules: Vec<Rule>,
    by_code: HashMap<&'static str, usize>,
}

impl Registry {
    /// Compile and validate a rule table. Fails fast on the first broken
    /// rule; nothing about a table failure is recoverable per-call.
    pub fn build(specs: &[RuleSpec]) -> Result<Self, RegistryError> {
        let mut rules = Vec::with_capacity(specs.len());
        let mut by_code = HashMap::new();

        for spec in specs {
            let rule = compile_spec(spec)?;
            let index = rules.len();
            for &code in spec.codes {
                if by_code.insert(code, index).is_some() {
                    return Err(RegistryError::DuplicateCode(code));
                }
            }
            rules.push(rule);
        }

        Ok(Self { rules, by_code })
    }

    /// The builtin tsc rule table.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::build(BUILTIN_RULES)
    }

    /// Pure read; a miss means "use passthrough", not an error.
    pub fn lookup(&self, code: &str) -> Option<&Rule> {
        self.by_code.get(code).map(|&index| &self.rules[index])
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All compiled rules, in table order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

fn compile_spec(spec: &RuleSpec) -> Result<Rule, RegistryError> {
    let code = *spec.codes.first().ok_or(RegistryError::EmptyCodeList)?;

    let pattern = Pattern::compile(spec.pattern)
        .map_err(|source| RegistryError::InvalidPattern { code, source })?;

    check_tokens(code, "template", spec.template, &pattern, false)?;
    if let Some(hint) = spec.hint {
        check_tokens(code, "hint", hint, &pattern, false)?;
    }
    if let Some(suggest) = &spec.suggest {
        if !pattern.declares(suggest.token) {
            return Err(RegistryError::UnknownSuggestionToken {
                code,
                token: suggest.token,
            });
        }
        // The clause may additionally reference the chosen candidate.
        check_tokens(code, "suggestion clause", suggest.clause, &pattern, true)?;
    }
    if let Some(detail) = &spec.detail {
        for token in detail.tokens() {
            if !pattern.declares(token) {
                return Err(RegistryError::UnknownDetailToken { code, token });
            }
        }
    }

    Ok(Rule {
        codes: spec.codes,
        pattern,
        template: spec.template,
        hint: spec.hint,
        suggest: spec.suggest,
        detail: spec.detail,
    })
}

fn check_tokens(
    code: &'static str,
    place: &'static str,
    text: &str,
    pattern: &Pattern,
    allow_suggestion: bool,
) -> Result<(), RegistryError> {
    for token in referenced_tokens(text) {
        if allow_suggestion && token == "suggestion" {
            continue;
        }
        if !pattern.declares(token) {
            return Err(RegistryError::UnknownTemplateToken {
                code,
                place,
                token: token.to_string(),
            });
        }
    }
    Ok(())
}
