//! Template rendering.
//!
//! Fills a rule's output template, hint, and suggestion clause from the
//! captures of a matched message. By the time rendering runs, registry
//! validation has already proven that every referenced token is captured;
//! a miss here is a bug in that validation, not a user condition, so it
//! panics instead of returning an error.

use crate::detail;
use crate::diagnostic::Suggestion;
use crate::parser::CaptureSet;
use crate::rule::Rule;

/// Token names referenced by a template, in order of appearance.
/// Malformed placeholders are treated as literal text; registry validation
/// only cares about well-formed `{token}` references.
pub(crate) fn referenced_tokens(template: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if close > 0 => {
                tokens.push(&after[..close]);
                rest = &after[close + 1..];
            }
            _ => rest = after,
        }
    }
    tokens
}

/// Substitute `{token}` references from the capture set. `{suggestion}`
/// resolves to the chosen candidate when one is present.
fn fill(template: &str, captures: &CaptureSet, suggestion: Option<&Suggestion>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if close > 0 => {
                let token = &after[..close];
                let value = if token == "suggestion" {
                    suggestion
                        .map(|s| s.candidate.as_str())
                        .unwrap_or_else(|| missing_token(token))
                } else {
                    captures
                        .get(token)
                        .unwrap_or_else(|| missing_token(token))
                };
                out.push_str(value);
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn missing_token(token: &str) -> ! {
    panic!("template references token `{token}` with no captured value; registry validation should have rejected this rule")
}

/// Render the rewritten message and optional hint for a matched rule.
/// The suggestion clause is appended only when a suggestion was found.
pub fn render(
    rule: &Rule,
    captures: &CaptureSet,
    suggestion: Option<&Suggestion>,
) -> (String, Option<String>) {
    let mut message = fill(rule.template, captures, None);

    if let Some(spec) = &rule.detail {
        for sentence in detail::sentences(spec, captures) {
            message.push(' ');
            message.push_str(&sentence);
        }
    }

    if let Some(found) = suggestion
        && let Some(spec) = &rule.suggest
    {
        message.push(' ');
        message.push_str(&fill(spec.clause, captures, Some(found)));
    }

    let hint = rule.hint.map(|hint| fill(hint, captures, None));
    (message, hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::CaptureSet;

    #[test]
    fn referenced_tokens_in_order() {
        assert_eq!(
            referenced_tokens("'{a}' and '{b}' and '{a}'"),
            vec!["a", "b", "a"]
        );
        assert!(referenced_tokens("no tokens").is_empty());
    }

    #[test]
    fn fill_substitutes_captures() {
        let captures = CaptureSet::from_pairs(&[("type", "Person"), ("property", "firstName")]);
        assert_eq!(
            fill(
                "The type '{type}' has no property named '{property}'.",
                &captures,
                None
            ),
            "The type 'Person' has no property named 'firstName'."
        );
    }

    #[test]
    fn fill_resolves_suggestion_token() {
        let captures = CaptureSet::default();
        let suggestion = crate::diagnostic::Suggestion {
            candidate: "firstName".to_string(),
            distance: 1,
        };
        assert_eq!(
            fill("Did you mean '{suggestion}'?", &captures, Some(&suggestion)),
            "Did you mean 'firstName'?"
        );
    }

    #[test]
    #[should_panic(expected = "registry validation")]
    fn missing_capture_panics() {
        let captures = CaptureSet::default();
        fill("'{ghost}'", &captures, None);
    }
}
