//! Capture patterns.
//!
//! A pattern is the fixed textual skeleton of one diagnostic category with
//! `{token}` placeholders where the checker substitutes identifiers, type
//! names or counts. Compilation splits the skeleton into literal and
//! capture segments once, at registry build time; per-call matching walks
//! the compiled segments (see `parser`).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text that must appear verbatim in the raw message.
    Literal(String),
    /// A named token capturing up to the next literal anchor.
    Capture(&'static str),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unclosed `{{` in pattern")]
    UnclosedBrace,
    #[error("stray `}}` in pattern")]
    StrayBrace,
    #[error("empty token name")]
    EmptyToken,
    #[error("token `{0}` declared more than once")]
    DuplicateToken(&'static str),
    #[error("captures `{0}` and `{1}` have no literal text between them")]
    AdjacentCaptures(&'static str, &'static str),
    #[error("pattern has no literal text")]
    NoLiteral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: &'static str,
    segments: Vec<Segment>,
    tokens: Vec<&'static str>,
}

impl Pattern {
    /// Compile a skeleton string. Token names must be unique, non-empty,
    /// and separated by at least one literal character; a pattern that is
    /// nothing but captures would anchor on nothing and is rejected.
    pub fn compile(source: &'static str) -> Result<Self, PatternError> {
        let mut segments = Vec::new();
        let mut tokens: Vec<&'static str> = Vec::new();
        let mut rest = source;

        while !rest.is_empty() {
            match rest.find('{') {
                Some(open) => {
                    if rest[..open].contains('}') {
                        return Err(PatternError::StrayBrace);
                    }
                    if open > 0 {
                        segments.push(Segment::Literal(rest[..open].to_string()));
                    }
                    let after = &rest[open + 1..];
                    let close = after.find('}').ok_or(PatternError::UnclosedBrace)?;
                    let name = &after[..close];
                    if name.is_empty() {
                        return Err(PatternError::EmptyToken);
                    }
                    if tokens.contains(&name) {
                        return Err(PatternError::DuplicateToken(name));
                    }
                    if let Some(&Segment::Capture(prev)) = segments.last() {
                        return Err(PatternError::AdjacentCaptures(prev, name));
                    }
                    tokens.push(name);
                    segments.push(Segment::Capture(name));
                    rest = &after[close + 1..];
                }
                None => {
                    if rest.contains('}') {
                        return Err(PatternError::StrayBrace);
                    }
                    segments.push(Segment::Literal(rest.to_string()));
                    rest = "";
                }
            }
        }

        if !segments.iter().any(|s| matches!(s, Segment::Literal(_))) {
            return Err(PatternError::NoLiteral);
        }

        Ok(Self {
            source,
            segments,
            tokens,
        })
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Token names in declaration order.
    pub fn tokens(&self) -> &[&'static str] {
        &self.tokens
    }

    pub fn declares(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| *t == token)
    }
}
