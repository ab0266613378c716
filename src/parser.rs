//! Skeleton matching.
//!
//! Matches a raw checker message against a compiled `Pattern`. The first
//! literal is anchored at the start of the message and the final segment
//! must consume its end, so a truncated or reformatted message falls out
//! as `NoMatch` instead of producing garbage captures.
//!
//! Anchor search is bracket-aware: a capture extends to the next
//! occurrence of the following literal *outside* any `{ }`, `[ ]` or
//! `( )` nesting, so quoted structural type text such as
//! `'{ id: number; }'` does not cut a capture short.

use crate::pattern::{Pattern, Segment};

/// The message does not follow the pattern's skeleton. Not an error in the
/// engine's contract; the translator degrades to passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMatch;

/// Token name → captured text, produced fresh per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSet {
    entries: Vec<(&'static str, String)>,
}

impl CaptureSet {
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    fn insert(&mut self, token: &'static str, value: String) {
        self.entries.push((token, value));
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&'static str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(name, value)| (*name, value.to_string()))
                .collect(),
        }
    }
}

/// Match `message` against `pattern`. Deterministic and side-effect-free;
/// captures must be non-empty.
pub fn parse(pattern: &Pattern, message: &str) -> Result<CaptureSet, NoMatch> {
    let segments = pattern.segments();
    let mut captures = CaptureSet::default();
    let mut rest = message;

    for (index, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(literal) => {
                rest = rest.strip_prefix(literal.as_str()).ok_or(NoMatch)?;
            }
            Segment::Capture(token) => match segments.get(index + 1) {
                Some(Segment::Literal(anchor)) => {
                    let at = find_anchor(rest, anchor).ok_or(NoMatch)?;
                    if at == 0 {
                        return Err(NoMatch);
                    }
                    captures.insert(*token, rest[..at].to_string());
                    rest = &rest[at..];
                }
                None => {
                    if rest.is_empty() {
                        return Err(NoMatch);
                    }
                    captures.insert(*token, rest.to_string());
                    rest = "";
                }
                // Pattern compilation rejects adjacent captures.
                Some(Segment::Capture(_)) => unreachable!("adjacent captures in pattern"),
            },
        }
    }

    if rest.is_empty() {
        Ok(captures)
    } else {
        Err(NoMatch)
    }
}

/// Byte offset of the first occurrence of `anchor` in `haystack` at
/// bracket depth zero. Unbalanced closers saturate rather than going
/// negative, so a message with stray closers still scans.
///
/// A capture may itself be a bracket token (tsc's `'{' expected.`), which
/// would raise the depth before the anchor is ever seen; while everything
/// scanned so far is bracket characters the anchor may still close the
/// capture.
fn find_anchor(haystack: &str, anchor: &str) -> Option<usize> {
    let mut depth: usize = 0;
    let mut only_brackets = true;
    for (at, ch) in haystack.char_indices() {
        if (depth == 0 || only_brackets) && haystack[at..].starts_with(anchor) {
            return Some(at);
        }
        match ch {
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth = depth.saturating_sub(1),
            _ => only_brackets = false,
        }
    }
    None
}
