//! Post-capture detail analysis.
//!
//! Some captures carry more structure than a template substitution can
//! surface. An inline object type such as `{ id: number; name: string; }`
//! names exactly which properties disagree, so instead of echoing both
//! types whole, a rule with a `DetailSpec` gets its captures inspected
//! here and extra sentences appended to the rewritten message.

use crate::parser::CaptureSet;
use crate::rule::DetailSpec;

/// Sentences to append to the rewritten message, in declaration order of
/// the expected type. Captures that do not carry the required structure
/// yield nothing; the base rewrite already covers them.
pub(crate) fn sentences(spec: &DetailSpec, captures: &CaptureSet) -> Vec<String> {
    match *spec {
        DetailSpec::PropertyMismatches { found, expected } => {
            let (Some(found), Some(expected)) = (captures.get(found), captures.get(expected))
            else {
                return Vec::new();
            };
            property_mismatches(found, expected)
                .into_iter()
                .map(|(name, found_ty, expected_ty)| {
                    format!(
                        "The property '{name}' is provided as '{found_ty}' but expects '{expected_ty}'."
                    )
                })
                .collect()
        }
    }
}

/// Properties present in both object literals whose types differ, in the
/// expected literal's declaration order.
fn property_mismatches(found: &str, expected: &str) -> Vec<(String, String, String)> {
    let (Some(found_props), Some(expected_props)) =
        (object_properties(found), object_properties(expected))
    else {
        return Vec::new();
    };

    let mut mismatches = Vec::new();
    for (name, expected_ty) in &expected_props {
        if let Some((_, found_ty)) = found_props.iter().find(|(n, _)| n == name)
            && found_ty != expected_ty
        {
            mismatches.push((name.clone(), found_ty.clone(), expected_ty.clone()));
        }
    }
    mismatches
}

/// `(name, type)` pairs of an inline object literal, or `None` when the
/// text is not one. Nested object types are not split further; a nested
/// mismatch reads as one differing property type, which is still true.
fn object_properties(text: &str) -> Option<Vec<(String, String)>> {
    let inner = text.trim().strip_prefix('{')?.strip_suffix('}')?;

    let mut props = Vec::new();
    for piece in inner.split(';') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let (name, ty) = piece.split_once(':')?;
        props.push((name.trim().to_string(), ty.trim().to_string()));
    }
    Some(props)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_object_literal_properties() {
        let props = object_properties("{ id: number; name: string; }").expect("object literal");
        assert_eq!(
            props,
            vec![
                ("id".to_string(), "number".to_string()),
                ("name".to_string(), "string".to_string()),
            ]
        );
    }

    #[test]
    fn plain_type_name_is_not_an_object_literal() {
        assert_eq!(object_properties("Person"), None);
        assert_eq!(object_properties("string[]"), None);
    }

    #[test]
    fn empty_object_literal_has_no_properties() {
        assert_eq!(object_properties("{}"), Some(Vec::new()));
        assert_eq!(object_properties("{ }"), Some(Vec::new()));
    }

    #[test]
    fn reports_only_differing_properties() {
        let mismatches = property_mismatches(
            "{ id: string; name: string; }",
            "{ id: number; name: string; }",
        );
        assert_eq!(
            mismatches,
            vec![(
                "id".to_string(),
                "string".to_string(),
                "number".to_string()
            )]
        );
    }

    #[test]
    fn properties_missing_from_either_side_are_skipped() {
        // A missing required property is TS2741's domain, not a mismatch.
        let mismatches = property_mismatches("{ id: number; }", "{ id: number; name: string; }");
        assert!(mismatches.is_empty());
    }

    #[test]
    fn mismatches_follow_expected_declaration_order() {
        let mismatches = property_mismatches(
            "{ a: string; b: string; c: string; }",
            "{ c: number; a: boolean; }",
        );
        let names: Vec<&str> = mismatches.iter().map(|(n, _, _)| n.as_str()).collect();
        assert_eq!(names, vec!["c", "a"]);
    }
}
