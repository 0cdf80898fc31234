//! Property tests for the validation laws: absence, type checks,
//! inclusive bounds, path accumulation, idempotence, and the
//! `valid ⇔ errors non-empty` invariant.

use proptest::prelude::*;
use schemata::prelude::*;
use serde_json::{json, Value};

/// Arbitrary JSON values up to a small depth.
fn any_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn schemas() -> Vec<Box<dyn Schema>> {
    vec![
        string().min(2).max(8).boxed(),
        number().min(-5).max(5).boxed(),
        boolean().boxed(),
        object([("a", string().boxed()), ("b", number().optional().boxed())]).boxed(),
    ]
}

proptest! {
    /// Valid iff there are no errors, and never more than one error.
    #[test]
    fn valid_iff_no_errors(input in any_json()) {
        for schema in schemas() {
            let r = schema.validate_value(&input);
            prop_assert_eq!(r.is_valid(), r.errors().is_empty());
            prop_assert!(r.errors().len() <= 1);
            if r.is_valid() {
                prop_assert_eq!(r.value(), Some(&input));
            }
        }
    }

    /// Same schema, same input, same result.
    #[test]
    fn validation_is_idempotent(input in any_json()) {
        for schema in schemas() {
            prop_assert_eq!(schema.validate_value(&input), schema.validate_value(&input));
        }
    }

    /// Strings of the wrong type are always a single typeMismatch.
    #[test]
    fn non_strings_mismatch(input in any_json().prop_filter("non-string", |v| !v.is_string())) {
        let r = string().min(1).validate_value(&input);
        prop_assert_eq!(r.errors().len(), 1);
        prop_assert_eq!(r.errors()[0].kind, ErrorKind::TypeMismatch);
    }

    /// Numbers of the wrong type are always a single typeMismatch.
    #[test]
    fn non_numbers_mismatch(input in any_json().prop_filter("non-number", |v| !v.is_number())) {
        let r = number().max(1).validate_value(&input);
        prop_assert_eq!(r.errors().len(), 1);
        prop_assert_eq!(r.errors()[0].kind, ErrorKind::TypeMismatch);
    }

    /// Inclusive string length bounds.
    #[test]
    fn string_bounds(min in 0usize..10, span in 0usize..10, s in "[a-z]{0,25}") {
        let max = min + span;
        let r = string().min(min).max(max).validate_value(&json!(s));
        let len = s.len();
        if (min..=max).contains(&len) {
            prop_assert!(r.is_valid());
        } else {
            prop_assert_eq!(r.errors().len(), 1);
            prop_assert_eq!(r.errors()[0].kind, ErrorKind::RuleViolation);
        }
    }

    /// Inclusive integer bounds.
    #[test]
    fn number_bounds(min in -100i32..100, span in 0i32..100, n in -300i64..300) {
        let max = min + span;
        let r = number().min(min).max(max).validate_value(&json!(n));
        if (i64::from(min)..=i64::from(max)).contains(&n) {
            prop_assert!(r.is_valid());
        } else {
            prop_assert_eq!(r.errors().len(), 1);
            prop_assert_eq!(r.errors()[0].kind, ErrorKind::RuleViolation);
        }
    }

    /// Inclusive float bounds, including values on the bounds themselves.
    #[test]
    fn float_number_bounds(
        min in -100.0f64..100.0,
        span in 0.0f64..100.0,
        n in prop_oneof![-300.0f64..300.0, Just(0.0)],
        on_bound in any::<Option<bool>>(),
    ) {
        let max = min + span;
        let n = match on_bound {
            Some(true) => min,
            Some(false) => max,
            None => n,
        };
        let r = number().min(min).max(max).validate_value(&json!(n));
        prop_assert_eq!(r.is_valid(), min <= n && n <= max);
        if !r.is_valid() {
            prop_assert_eq!(r.errors().len(), 1);
            prop_assert_eq!(r.errors()[0].kind, ErrorKind::RuleViolation);
        }
    }

    /// A missing value is accepted iff the schema is optional.
    #[test]
    fn missing_accepted_iff_optional(optional in any::<bool>()) {
        let schema = if optional { string().optional() } else { string() };
        let r = schema.validate(None);
        prop_assert_eq!(r.is_valid(), optional);
        if !optional {
            prop_assert_eq!(r.errors()[0].kind, ErrorKind::Required);
            prop_assert!(r.errors()[0].path.is_empty());
        }
    }

    /// An error n objects deep carries an n-segment path, outermost first.
    #[test]
    fn nested_path_accumulates(keys in prop::collection::vec("[a-z]{1,6}", 1..6)) {
        let mut schema: Box<dyn Schema> = string().min(5).boxed();
        let mut input = json!("hi");
        for key in keys.iter().rev() {
            schema = object([(key.clone(), schema)]).boxed();
            input = json!({ key.as_str(): input });
        }
        let r = schema.validate_value(&input);
        prop_assert_eq!(r.errors().len(), 1);
        prop_assert_eq!(r.errors()[0].kind, ErrorKind::RuleViolation);
        prop_assert_eq!(&r.errors()[0].path, &keys);
    }
}
