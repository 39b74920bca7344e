//! Property-based tests for veritas-validator.

use proptest::prelude::*;
use veritas_validator::prelude::*;

// Both preludes export `any`; the strategy one is meant below.
use proptest::prelude::any;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn nonzero_idempotent(s in ".*") {
        let v = nonzero();
        let f = field("s", &s);
        prop_assert_eq!(v.validate(&f), v.validate(&f));
    }

    #[test]
    fn len_idempotent(s in ".*", min in 0usize..8, max in 0usize..16) {
        let v = len(min, max);
        let f = field("s", &s);
        prop_assert_eq!(v.validate(&f), v.validate(&f));
    }

    #[test]
    fn gte_idempotent(n in any::<i64>()) {
        let v = gte(0i64);
        let f = field("n", &n);
        prop_assert_eq!(v.validate(&f), v.validate(&f));
    }

    #[test]
    fn schema_idempotent(a in ".{0,10}", b in any::<u32>()) {
        let schema = Schema::new()
            .field(field("a", &a), len(1, 5))
            .field(field("b", &b), nonzero());
        prop_assert_eq!(validate(&schema), validate(&schema));
    }
}

// ============================================================================
// LEAF LAWS
// ============================================================================

proptest! {
    #[test]
    fn len_matches_inclusive_bounds(n in 0usize..40, min in 0usize..20, max in 0usize..20) {
        let items = vec![0u8; n];
        let ok = len(min, max).validate(&field("items", &items)).is_ok();
        prop_assert_eq!(ok, min <= n && n <= max);
    }

    #[test]
    fn nonzero_on_integers(n in any::<i32>()) {
        prop_assert_eq!(nonzero().validate(&field("n", &n)).is_ok(), n != 0);
    }

    #[test]
    fn gte_and_lt_partition_integers(n in any::<i64>(), bound in any::<i64>()) {
        let f = field("n", &n);
        let ge = gte(bound).validate(&f).is_ok();
        let lt_ = lt(bound).validate(&f).is_ok();
        prop_assert_eq!(ge, n >= bound);
        prop_assert!(ge != lt_);
    }

    #[test]
    fn mixed_width_comparison_is_exact(n in any::<u64>(), bound in any::<i8>()) {
        let ok = gt(bound).validate(&field("n", &n)).is_ok();
        prop_assert_eq!(ok, i128::from(n) > i128::from(bound));
    }
}

// ============================================================================
// COMBINATOR LAWS: all fails iff some child fails; any fails iff every child fails
// ============================================================================

proptest! {
    #[test]
    fn all_fails_iff_either_fails(s in ".{0,30}") {
        let a = len(3, usize::MAX);
        let b = len(0, 10);
        let combined = a.clone().and(b.clone());
        let f = field("s", &s);

        let a_ok = a.validate(&f).is_ok();
        let b_ok = b.validate(&f).is_ok();
        prop_assert_eq!(combined.validate(&f).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn all_returns_first_failure_only(s in ".{0,30}") {
        let a = len(3, usize::MAX);
        let b = len(0, 10);
        let f = field("s", &s);

        if let Err(expected) = a.validate(&f) {
            prop_assert_eq!(all![a, b].validate(&f), Err(expected));
        } else {
            prop_assert_eq!(all![a, b.clone()].validate(&f), b.validate(&f));
        }
    }

    #[test]
    fn any_fails_iff_both_fail(s in ".{0,30}") {
        let a = len(0, 2);
        let b = len(8, 12);
        let combined = a.clone().or(b.clone());
        let f = field("s", &s);

        let a_ok = a.validate(&f).is_ok();
        let b_ok = b.validate(&f).is_ok();
        prop_assert_eq!(combined.validate(&f).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn any_failure_concatenates_in_order(n in 3usize..8) {
        let items = vec![1i16; n];
        let f = field("items", &items);
        let errors = any![len!(0, 2, "first"), len!(8, 12, "second")]
            .validate(&f)
            .unwrap_err();
        let messages: Vec<_> = errors.iter().map(|e| e.message.to_string()).collect();
        prop_assert_eq!(messages, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn schema_reports_every_failing_entry(values in proptest::collection::vec(any::<u8>(), 0..12)) {
        let names: Vec<String> = (0..values.len()).map(|i| format!("v{i}")).collect();
        let mut schema = Schema::new();
        for (name, value) in names.iter().zip(&values) {
            schema.insert(field(name.clone(), value), nonzero());
        }

        let zeros = values.iter().filter(|v| **v == 0).count();
        match validate(&schema) {
            Ok(()) => {
                prop_assert_eq!(zeros, 0);
            }
            Err(errors) => {
                prop_assert_eq!(errors.len(), zeros);
            }
        }
    }

    #[test]
    fn nested_prefixes_every_inner_error(a in any::<i32>(), b in any::<i32>()) {
        let inner = Schema::new()
            .field(field("a", &a), nonzero())
            .field(field("b", &b), nonzero());
        let result = nested(inner).validate(&Field::opaque("outer", &()));

        let expected = usize::from(a == 0) + usize::from(b == 0);
        let errors = result.err().map(ValidationErrors::into_vec).unwrap_or_default();
        prop_assert_eq!(errors.len(), expected);
        prop_assert!(errors.iter().all(|e| e.field.starts_with("outer.")));
    }
}
