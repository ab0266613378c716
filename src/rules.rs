//! Builtin rule table.
//!
//! One `RuleSpec` per tsc message skeleton. Patterns are the checker's
//! exact phrasing with `{token}` captures; templates are the rewritten
//! message. Every template references every token its pattern captures,
//! so a matched message carries all of its identifiers into the rewrite.
//!
//! Adding a translated code is a table edit: declare a const, list it in
//! `BUILTIN_RULES`, and registry validation covers the rest.

use crate::rule::{ContextField, DetailSpec, RuleSpec, SuggestSpec};

pub const TYPE_NOT_ASSIGNABLE: RuleSpec = RuleSpec {
    codes: &["TS2322"],
    pattern: "Type '{found}' is not assignable to type '{expected}'.",
    template: "This value has type '{found}', but '{expected}' is expected here.",
    hint: Some("Change the value to match '{expected}', or widen the declared type."),
    suggest: None,
    detail: None,
};

pub const ARGUMENT_NOT_ASSIGNABLE: RuleSpec = RuleSpec {
    codes: &["TS2345"],
    pattern: "Argument of type '{found}' is not assignable to parameter of type '{expected}'.",
    template: "This argument has type '{found}', but the function expects '{expected}'.",
    hint: Some("Adjust the argument, or update the parameter's declared type."),
    suggest: None,
    detail: Some(DetailSpec::PropertyMismatches {
        found: "found",
        expected: "expected",
    }),
};

pub const WRONG_ARGUMENT_COUNT: RuleSpec = RuleSpec {
    codes: &["TS2554"],
    pattern: "Expected {expected} arguments, but got {found}.",
    template: "This call supplies {found} arguments, but the function takes {expected}.",
    hint: Some("Add or remove arguments until the call matches the function's signature."),
    suggest: None,
    detail: None,
};

pub const TOO_FEW_ARGUMENTS: RuleSpec = RuleSpec {
    codes: &["TS2555"],
    pattern: "Expected at least {expected} arguments, but got {found}.",
    template: "This call supplies {found} arguments, but the function needs at least {expected}.",
    hint: Some("Pass the missing required arguments."),
    suggest: None,
    detail: None,
};

pub const IMPLICIT_ANY_PARAMETER: RuleSpec = RuleSpec {
    codes: &["TS7006", "TS7044"],
    pattern: "Parameter '{param}' implicitly has an 'any' type.",
    template: "The parameter '{param}' has no type annotation, so it is treated as 'any'.",
    hint: Some("Annotate it, e.g. ({param}: SomeType)."),
    suggest: None,
    detail: None,
};

pub const IMPLICIT_ANY_BINDING: RuleSpec = RuleSpec {
    codes: &["TS7031"],
    pattern: "Binding element '{name}' implicitly has an 'any' type.",
    template: "The destructured element '{name}' has no type annotation, so it is treated as 'any'.",
    hint: Some("Annotate the destructuring pattern that introduces '{name}'."),
    suggest: None,
    detail: None,
};

pub const IMPLICIT_ANY_VARIABLE: RuleSpec = RuleSpec {
    codes: &["TS7034"],
    pattern: "Variable '{name}' implicitly has type '{type}' in some locations where its type cannot be determined.",
    template: "The checker cannot always tell what '{name}' holds, so it falls back to '{type}' in those places.",
    hint: Some("Give '{name}' an explicit type at its declaration."),
    suggest: None,
    detail: None,
};

pub const IMPLICIT_ANY_INDEX: RuleSpec = RuleSpec {
    codes: &["TS7053"],
    pattern: "Element implicitly has an 'any' type because expression of type '{index}' can't be used to index type '{object}'.",
    template: "Indexing '{object}' with a '{index}' is not declared, so the result is 'any'.",
    hint: Some("Add an index signature to '{object}' or narrow the key to its known properties."),
    suggest: None,
    detail: None,
};

pub const MISSING_PROPERTY: RuleSpec = RuleSpec {
    codes: &["TS2741"],
    pattern: "Property '{property}' is missing in type '{found}' but required in type '{expected}'.",
    template: "This value of type '{found}' lacks the property '{property}' that '{expected}' requires.",
    hint: Some("Add '{property}' to the value, or make it optional in '{expected}'."),
    suggest: None,
    detail: None,
};

pub const MISSING_PROPERTIES: RuleSpec = RuleSpec {
    codes: &["TS2739"],
    pattern: "Type '{found}' is missing the following properties from type '{expected}': {properties}",
    template: "This value of type '{found}' lacks properties that '{expected}' requires: {properties}.",
    hint: Some("Add the missing properties, or make them optional in '{expected}'."),
    suggest: None,
    detail: None,
};

pub const IMPOSSIBLE_COMPARISON: RuleSpec = RuleSpec {
    codes: &["TS2367"],
    pattern: "This comparison appears to be unintentional because the types '{left}' and '{right}' have no overlap.",
    template: "Values of '{left}' and '{right}' can never be equal, so this comparison always gives the same answer.",
    hint: Some("Compare values that can actually overlap, or remove the check."),
    suggest: None,
    detail: None,
};

pub const UNKNOWN_PROPERTY: RuleSpec = RuleSpec {
    codes: &["TS2339", "TS2551"],
    pattern: "Property '{property}' does not exist on type '{type}'.",
    template: "The type '{type}' has no property named '{property}'.",
    hint: Some("Check the spelling of '{property}', or add it to '{type}'."),
    suggest: Some(SuggestSpec::new("property", ContextField::Members)),
    detail: None,
};

pub const UNKNOWN_LITERAL_PROPERTY: RuleSpec = RuleSpec {
    codes: &["TS2353"],
    pattern: "Object literal may only specify known properties, and '{property}' does not exist in type '{type}'.",
    template: "The property '{property}' is not part of '{type}', so this object literal does not fit.",
    hint: Some("Remove '{property}' or declare it in '{type}'."),
    suggest: Some(SuggestSpec::new("property", ContextField::Members)),
    detail: None,
};

pub const UNKNOWN_NAME: RuleSpec = RuleSpec {
    codes: &["TS2304"],
    pattern: "Cannot find name '{name}'.",
    template: "Nothing named '{name}' is in scope here.",
    hint: Some("Declare '{name}' before using it, or fix the spelling."),
    suggest: Some(SuggestSpec::new("name", ContextField::NamesInScope)),
    detail: None,
};

pub const UNKNOWN_NAME_WITH_ALTERNATIVE: RuleSpec = RuleSpec {
    codes: &["TS2552"],
    pattern: "Cannot find name '{name}'. Did you mean '{alternative}'?",
    template: "Nothing named '{name}' is in scope here; the closest existing name is '{alternative}'.",
    hint: None,
    suggest: None,
    detail: None,
};

pub const POSSIBLY_UNDEFINED_OBJECT: RuleSpec = RuleSpec {
    codes: &["TS2532"],
    pattern: "Object is possibly 'undefined'.",
    template: "This value might be 'undefined' at this point.",
    hint: Some("Guard it first, or use optional chaining (?.)."),
    suggest: None,
    detail: None,
};

pub const POSSIBLY_UNDEFINED_NAME: RuleSpec = RuleSpec {
    codes: &["TS18048"],
    pattern: "'{name}' is possibly 'undefined'.",
    template: "'{name}' might be 'undefined' at this point.",
    hint: Some("Check '{name}' first, or use optional chaining (?.)."),
    suggest: None,
    detail: None,
};

pub const POSSIBLY_NULL_OBJECT: RuleSpec = RuleSpec {
    codes: &["TS2531"],
    pattern: "Object is possibly 'null'.",
    template: "This value might be 'null' at this point.",
    hint: Some("Guard it first, or use optional chaining (?.)."),
    suggest: None,
    detail: None,
};

pub const POSSIBLY_NULL_NAME: RuleSpec = RuleSpec {
    codes: &["TS18047"],
    pattern: "'{name}' is possibly 'null'.",
    template: "'{name}' might be 'null' at this point.",
    hint: Some("Check '{name}' first, or use optional chaining (?.)."),
    suggest: None,
    detail: None,
};

pub const NAME_IS_UNKNOWN_TYPE: RuleSpec = RuleSpec {
    codes: &["TS18046"],
    pattern: "'{name}' is of type 'unknown'.",
    template: "'{name}' is 'unknown' here, so nothing can be done with it until it is narrowed.",
    hint: Some("Narrow '{name}' with typeof, instanceof, or a type guard."),
    suggest: None,
    detail: None,
};

pub const OBJECT_IS_UNKNOWN_TYPE: RuleSpec = RuleSpec {
    codes: &["TS2571"],
    pattern: "Object is of type 'unknown'.",
    template: "This value is 'unknown' here, so nothing can be done with it until it is narrowed.",
    hint: Some("Narrow it with typeof, instanceof, or a type guard."),
    suggest: None,
    detail: None,
};

pub const SUSPECT_CAST: RuleSpec = RuleSpec {
    codes: &["TS2352"],
    pattern: "Conversion of type '{from}' to type '{to}' may be a mistake because neither type sufficiently overlaps with the other. If this was intentional, convert the expression to 'unknown' first.",
    template: "Casting '{from}' directly to '{to}' is suspicious because the types barely overlap.",
    hint: Some("If the cast is deliberate, go through 'unknown' first; otherwise narrow with a type guard."),
    suggest: None,
    detail: None,
};

pub const SPREAD_NEEDS_TUPLE: RuleSpec = RuleSpec {
    codes: &["TS2556"],
    pattern: "A spread argument must either have a tuple type or be passed to a rest parameter.",
    template: "This spread cannot be checked: the function wants fixed parameters but the spread value has no fixed length.",
    hint: Some("Spread a tuple (e.g. 'as const'), or give the function a rest parameter."),
    suggest: None,
    detail: None,
};

pub const LEFT_OPERAND_NOT_NUMERIC: RuleSpec = RuleSpec {
    codes: &["TS2362"],
    pattern: "The left-hand side of an arithmetic operation must be of type 'any', 'number', 'bigint' or an enum type.",
    template: "The left side of this arithmetic is not numeric.",
    hint: Some("Convert it to a number first, e.g. with Number(...)."),
    suggest: None,
    detail: None,
};

pub const RIGHT_OPERAND_NOT_NUMERIC: RuleSpec = RuleSpec {
    codes: &["TS2363"],
    pattern: "The right-hand side of an arithmetic operation must be of type 'any', 'number', 'bigint' or an enum type.",
    template: "The right side of this arithmetic is not numeric.",
    hint: Some("Convert it to a number first, e.g. with Number(...)."),
    suggest: None,
    detail: None,
};

pub const OPERATOR_NOT_APPLICABLE: RuleSpec = RuleSpec {
    codes: &["TS2365"],
    pattern: "Operator '{operator}' cannot be applied to types '{left}' and '{right}'.",
    template: "'{operator}' does not work between '{left}' and '{right}'.",
    hint: Some("Convert one side so both operands share a type '{operator}' accepts."),
    suggest: None,
    detail: None,
};

pub const OVERLOAD_INCOMPATIBLE: RuleSpec = RuleSpec {
    codes: &["TS2394"],
    pattern: "This overload signature is not compatible with its implementation signature.",
    template: "This overload promises something the implementation cannot deliver.",
    hint: Some("Widen the implementation signature to cover every overload."),
    suggest: None,
    detail: None,
};

pub const NO_OVERLOAD_MATCHES: RuleSpec = RuleSpec {
    codes: &["TS2769"],
    pattern: "No overload matches this call.",
    template: "None of the function's declared signatures accept these arguments.",
    hint: Some("Compare the arguments against each declared overload."),
    suggest: None,
    detail: None,
};

pub const REDECLARED_VARIABLE: RuleSpec = RuleSpec {
    codes: &["TS2451"],
    pattern: "Cannot redeclare block-scoped variable '{name}'.",
    template: "'{name}' is already declared in this block.",
    hint: Some("Rename one of the declarations of '{name}', or merge them."),
    suggest: None,
    detail: None,
};

pub const ASSIGN_TO_CONSTANT: RuleSpec = RuleSpec {
    codes: &["TS2588"],
    pattern: "Cannot assign to '{name}' because it is a constant.",
    template: "'{name}' was declared with const, so it cannot be reassigned.",
    hint: Some("Declare '{name}' with let if it needs to change."),
    suggest: None,
    detail: None,
};

pub const ASSIGN_TO_READONLY: RuleSpec = RuleSpec {
    codes: &["TS2540"],
    pattern: "Cannot assign to '{property}' because it is a read-only property.",
    template: "The property '{property}' is read-only, so it cannot be reassigned.",
    hint: Some("Drop the readonly modifier on '{property}', or assign in the constructor."),
    suggest: None,
    detail: None,
};

pub const USED_BEFORE_ASSIGNED: RuleSpec = RuleSpec {
    codes: &["TS2454"],
    pattern: "Variable '{name}' is used before being assigned.",
    template: "'{name}' may not have a value yet when it is used here.",
    hint: Some("Assign '{name}' on every path before this use."),
    suggest: None,
    detail: None,
};

pub const UNINITIALIZED_PROPERTY: RuleSpec = RuleSpec {
    codes: &["TS2564"],
    pattern: "Property '{property}' has no initializer and is not definitely assigned in the constructor.",
    template: "The property '{property}' might never receive a value.",
    hint: Some("Initialize '{property}' at its declaration or in the constructor."),
    suggest: None,
    detail: None,
};

pub const UNUSED_DECLARATION: RuleSpec = RuleSpec {
    codes: &["TS6133"],
    pattern: "'{name}' is declared but its value is never read.",
    template: "'{name}' is never used.",
    hint: Some("Remove '{name}', or prefix it with an underscore to keep it."),
    suggest: None,
    detail: None,
};

pub const UNKNOWN_MODULE: RuleSpec = RuleSpec {
    codes: &["TS2307"],
    pattern: "Cannot find module '{module}' or its corresponding type declarations.",
    template: "The module '{module}' cannot be resolved.",
    hint: Some("Install '{module}', or fix the import path."),
    suggest: Some(SuggestSpec::new("module", ContextField::Modules)),
    detail: None,
};

pub const BAD_INTERFACE_IMPLEMENTATION: RuleSpec = RuleSpec {
    codes: &["TS2420"],
    pattern: "Class '{class}' incorrectly implements interface '{interface}'.",
    template: "The class '{class}' does not satisfy everything '{interface}' declares.",
    hint: Some("Implement every member of '{interface}' in '{class}' with compatible types."),
    suggest: None,
    detail: None,
};

pub const PROPERTY_INCOMPATIBLE_WITH_BASE: RuleSpec = RuleSpec {
    codes: &["TS2416"],
    pattern: "Property '{property}' in type '{type}' is not assignable to the same property in base type '{base}'.",
    template: "'{type}' declares '{property}' with a type its base '{base}' does not allow.",
    hint: Some("Match the type '{base}' declares for '{property}'."),
    suggest: None,
    detail: None,
};

pub const NOT_CALLABLE: RuleSpec = RuleSpec {
    codes: &["TS2349"],
    pattern: "This expression is not callable.\n  Type '{type}' has no call signatures.",
    template: "This expression has type '{type}', which cannot be called like a function.",
    hint: Some("Only call values with a function type; '{type}' has none."),
    suggest: None,
    detail: None,
};

pub const MISSING_RETURN_VALUE: RuleSpec = RuleSpec {
    codes: &["TS2355"],
    pattern: "A function whose declared type is neither 'undefined', 'void', nor 'any' must return a value.",
    template: "This function declares a return type but has a path that returns nothing.",
    hint: Some("Return a value on every path, or declare the return type as void."),
    suggest: None,
    detail: None,
};

pub const INVALID_INDEX_TYPE: RuleSpec = RuleSpec {
    codes: &["TS2538"],
    pattern: "Type '{type}' cannot be used as an index type.",
    template: "A value of type '{type}' cannot be used as a key.",
    hint: Some("Index with a string, number, or symbol instead of '{type}'."),
    suggest: None,
    detail: None,
};

pub const TYPE_USED_AS_VALUE: RuleSpec = RuleSpec {
    codes: &["TS2693"],
    pattern: "'{name}' only refers to a type, but is being used as a value here.",
    template: "'{name}' is a type, and types do not exist at runtime.",
    hint: Some("Use a runtime value, or a class if '{name}' should be constructible."),
    suggest: None,
    detail: None,
};

pub const VALUE_USED_AS_TYPE: RuleSpec = RuleSpec {
    codes: &["TS2749"],
    pattern: "'{name}' refers to a value, but is being used as a type here. Did you mean 'typeof {reference}'?",
    template: "'{name}' is a runtime value, not a type; its type is written 'typeof {reference}'.",
    hint: None,
    suggest: None,
    detail: None,
};

pub const TOKEN_EXPECTED: RuleSpec = RuleSpec {
    codes: &["TS1005"],
    pattern: "'{token}' expected.",
    template: "Something is missing here: the checker expected '{token}'.",
    hint: None,
    suggest: None,
    detail: None,
};

pub const STATEMENT_EXPECTED: RuleSpec = RuleSpec {
    codes: &["TS1128"],
    pattern: "Declaration or statement expected.",
    template: "The checker expected a declaration or statement here.",
    hint: Some("There is likely a stray bracket or semicolon just before this point."),
    suggest: None,
    detail: None,
};

/// All builtin rules, in table order.
pub const BUILTIN_RULES: &[RuleSpec] = &[
    TYPE_NOT_ASSIGNABLE,
    ARGUMENT_NOT_ASSIGNABLE,
    WRONG_ARGUMENT_COUNT,
    TOO_FEW_ARGUMENTS,
    IMPLICIT_ANY_PARAMETER,
    IMPLICIT_ANY_BINDING,
    IMPLICIT_ANY_VARIABLE,
    IMPLICIT_ANY_INDEX,
    MISSING_PROPERTY,
    MISSING_PROPERTIES,
    IMPOSSIBLE_COMPARISON,
    UNKNOWN_PROPERTY,
    UNKNOWN_LITERAL_PROPERTY,
    UNKNOWN_NAME,
    UNKNOWN_NAME_WITH_ALTERNATIVE,
    POSSIBLY_UNDEFINED_OBJECT,
    POSSIBLY_UNDEFINED_NAME,
    POSSIBLY_NULL_OBJECT,
    POSSIBLY_NULL_NAME,
    NAME_IS_UNKNOWN_TYPE,
    OBJECT_IS_UNKNOWN_TYPE,
    SUSPECT_CAST,
    SPREAD_NEEDS_TUPLE,
    LEFT_OPERAND_NOT_NUMERIC,
    RIGHT_OPERAND_NOT_NUMERIC,
    OPERATOR_NOT_APPLICABLE,
    OVERLOAD_INCOMPATIBLE,
    NO_OVERLOAD_MATCHES,
    REDECLARED_VARIABLE,
    ASSIGN_TO_CONSTANT,
    ASSIGN_TO_READONLY,
    USED_BEFORE_ASSIGNED,
    UNINITIALIZED_PROPERTY,
    UNUSED_DECLARATION,
    UNKNOWN_MODULE,
    BAD_INTERFACE_IMPLEMENTATION,
    PROPERTY_INCOMPATIBLE_WITH_BASE,
    NOT_CALLABLE,
    MISSING_RETURN_VALUE,
    INVALID_INDEX_TYPE,
    TYPE_USED_AS_VALUE,
    VALUE_USED_AS_TYPE,
    TOKEN_EXPECTED,
    STATEMENT_EXPECTED,
];
