//! tsc output-line ingestion.
//!
//! Integrations that sit on raw compiler output rather than structured
//! editor diagnostics can turn each line of the form
//! `src/app.ts(12,5): error TS2551: Property 'x' does not exist ...`
//! into a `RawDiagnostic`. Pure string parsing; lines that do not follow
//! the format yield `None`.

use crate::diagnostic::{Position, RawDiagnostic, Severity, Span};

pub fn parse_tsc_line(line: &str) -> Option<RawDiagnostic> {
    let (file, rest) = line.split_once('(')?;
    let (coords, rest) = rest.split_once("): ")?;
    let (line_text, column_text) = coords.split_once(',')?;
    let (severity_text, rest) = rest.split_once(' ')?;
    let (code, message) = rest.split_once(": ")?;

    let severity = match severity_text {
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        _ => return None,
    };
    if code.is_empty() || message.is_empty() {
        return None;
    }

    let line_number: usize = line_text.parse().ok()?;
    let column: usize = column_text.parse().ok()?;
    // tsc reports 1-based columns; spans store 0-based.
    let position = Position::new(line_number, column.checked_sub(1)?);

    Some(
        RawDiagnostic::new(code, message)
            .with_severity(severity)
            .with_file(file)
            .with_span(Span::new(position, position)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_error_line() {
        let line = "src/app.ts(12,5): error TS2551: Property 'fistName' does not exist on type 'Person'.";
        let raw = parse_tsc_line(line).expect("line should parse");
        assert_eq!(raw.file.as_deref(), Some("src/app.ts"));
        assert_eq!(raw.code, "TS2551");
        assert_eq!(raw.severity, Severity::Error);
        assert_eq!(
            raw.message,
            "Property 'fistName' does not exist on type 'Person'."
        );
        let span = raw.span.expect("span should be set");
        assert_eq!(span.start.line, 12);
        assert_eq!(span.start.column, 4);
    }

    #[test]
    fn parses_warning_line() {
        let line = "lib/util.ts(3,1): warning TS6133: 'unused' is declared but its value is never read.";
        let raw = parse_tsc_line(line).expect("line should parse");
        assert_eq!(raw.severity, Severity::Warning);
        assert_eq!(raw.code, "TS6133");
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_tsc_line("not a tsc line").is_none());
        assert!(parse_tsc_line("src/app.ts(12,x): error TS1: m").is_none());
        assert!(parse_tsc_line("src/app.ts(12,5): fatal TS1: m").is_none());
        assert!(parse_tsc_line("").is_none());
    }

    #[test]
    fn message_may_contain_colons() {
        let line = "a.ts(1,1): error TS2322: Type '{ x: number; }' is not assignable to type 'Y'.";
        let raw = parse_tsc_line(line).expect("line should parse");
        assert_eq!(
            raw.message,
            "Type '{ x: number; }' is not assignable to type 'Y'."
        );
    }
}
