use std::collections::HashSet;

use clarify::registry::{Registry, RegistryError};
use clarify::rule::{ContextField, DetailSpec, RuleSpec, SuggestSpec};
use clarify::rules::BUILTIN_RULES;

#[test]
fn builtin_table_builds() {
    let registry = Registry::builtin().expect("builtin rule table should validate");
    assert_eq!(registry.len(), BUILTIN_RULES.len());
}

#[test]
fn builtin_codes_are_unique() {
    let mut codes = HashSet::new();
    for rule in BUILTIN_RULES {
        for code in rule.codes {
            assert!(codes.insert(*code), "duplicate error code in table: {code}");
        }
    }
}

#[test]
fn lookup_finds_every_claimed_code() {
    let registry = Registry::builtin().expect("builtin rule table should validate");
    for rule in BUILTIN_RULES {
        for code in rule.codes {
            let found = registry.lookup(code).expect("code missing from registry");
            assert_eq!(found.pattern.source(), rule.pattern);
        }
    }
}

#[test]
fn lookup_miss_is_none() {
    let registry = Registry::builtin().expect("builtin rule table should validate");
    assert!(registry.lookup("TS9999").is_none());
    assert!(registry.lookup("").is_none());
}

#[test]
fn rejects_two_rules_claiming_one_code() {
    let table = [
        RuleSpec {
            codes: &["TS2304"],
            pattern: "Cannot find name '{name}'.",
            template: "Nothing named '{name}' is in scope.",
            hint: None,
            suggest: None,
            detail: None,
        },
        RuleSpec {
            codes: &["TS2552", "TS2304"],
            pattern: "Cannot find name '{name}'. Did you mean '{alt}'?",
            template: "Nothing named '{name}'; closest is '{alt}'.",
            hint: None,
            suggest: None,
            detail: None,
        },
    ];
    assert_eq!(
        Registry::build(&table).unwrap_err(),
        RegistryError::DuplicateCode("TS2304")
    );
}

#[test]
fn rejects_template_with_undeclared_token() {
    let table = [RuleSpec {
        codes: &["TS2304"],
        pattern: "Cannot find name '{name}'.",
        template: "Nothing named '{ghost}' is in scope.",
        hint: None,
        suggest: None,
        detail: None,
    }];
    let err = Registry::build(&table).unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnknownTemplateToken {
            code: "TS2304",
            place: "template",
            token: "ghost".to_string(),
        }
    );
}

#[test]
fn rejects_hint_with_undeclared_token() {
    let table = [RuleSpec {
        codes: &["TS2304"],
        pattern: "Cannot find name '{name}'.",
        template: "Nothing named '{name}' is in scope.",
        hint: Some("Declare '{ghost}' first."),
        suggest: None,
        detail: None,
    }];
    assert!(matches!(
        Registry::build(&table).unwrap_err(),
        RegistryError::UnknownTemplateToken { place: "hint", .. }
    ));
}

#[test]
fn rejects_suggestion_on_uncaptured_token() {
    let table = [RuleSpec {
        codes: &["TS2304"],
        pattern: "Cannot find name '{name}'.",
        template: "Nothing named '{name}' is in scope.",
        hint: None,
        suggest: Some(SuggestSpec::new("ghost", ContextField::NamesInScope)),
        detail: None,
    }];
    assert_eq!(
        Registry::build(&table).unwrap_err(),
        RegistryError::UnknownSuggestionToken {
            code: "TS2304",
            token: "ghost",
        }
    );
}

#[test]
fn rejects_detail_on_uncaptured_token() {
    let table = [RuleSpec {
        codes: &["TS2345"],
        pattern: "Argument of type '{found}' is not assignable to parameter of type '{expected}'.",
        template: "This argument has type '{found}', but the function expects '{expected}'.",
        hint: None,
        suggest: None,
        detail: Some(DetailSpec::PropertyMismatches {
            found: "found",
            expected: "ghost",
        }),
    }];
    assert_eq!(
        Registry::build(&table).unwrap_err(),
        RegistryError::UnknownDetailToken {
            code: "TS2345",
            token: "ghost",
        }
    );
}

#[test]
fn rejects_malformed_pattern() {
    let table = [RuleSpec {
        codes: &["TS0001"],
        pattern: "Unclosed '{name' here.",
        template: "whatever",
        hint: None,
        suggest: None,
        detail: None,
    }];
    assert!(matches!(
        Registry::build(&table).unwrap_err(),
        RegistryError::InvalidPattern { code: "TS0001", .. }
    ));
}
