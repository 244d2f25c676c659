//! Property-based tests for predicates using proptest.

use std::cmp::Ordering;

use branchwork_predicate::{compare_values, Comparison, Condition, Dir, OrderBy, Value};
use proptest::prelude::*;

proptest! {
    /// A primary condition always decides, whatever the directives say.
    #[test]
    fn primary_condition_decides(
        when in any::<bool>(),
        a in any::<i64>(),
        b in any::<i64>(),
        text in "[a-z]{0,8}",
    ) {
        let cond = Condition::new()
            .when(when)
            .gt(a, b)
            .lt(a, b)
            .eq(a, b)
            .contains(text.clone(), "q")
            .build();
        prop_assert_eq!(cond.evaluate(), when);
    }

    /// Without a primary condition, the gt directive decides when present.
    #[test]
    fn gt_outranks_everything(a in any::<i64>(), b in any::<i64>()) {
        let cond = Condition::new()
            .ne(1, 1)
            .eq(1, 2)
            .gt(a, b)
            .build();
        prop_assert_eq!(cond.evaluate(), a > b);
    }

    /// Integer ordering directives agree with native ordering.
    #[test]
    fn integer_ordering_matches_native(a in any::<i64>(), b in any::<u64>()) {
        let expected_gt = i128::from(a) > i128::from(b);
        let expected_lt = i128::from(a) < i128::from(b);
        prop_assert_eq!(Comparison::gt(a, b).evaluate(), expected_gt);
        prop_assert_eq!(Comparison::lt(a, b).evaluate(), expected_lt);
    }

    /// eq and ne are always complementary.
    #[test]
    fn eq_ne_complementary(a in "[a-c]{0,3}", b in "[a-c]{0,3}") {
        let eq = Comparison::eq(a.clone(), b.clone()).evaluate();
        let ne = Comparison::ne(a, b).evaluate();
        prop_assert_ne!(eq, ne);
    }

    /// A string always contains, starts with and ends with itself.
    #[test]
    fn string_contains_itself(s in ".{0,20}") {
        prop_assert!(Comparison::contains(s.clone(), s.clone()).evaluate());
        prop_assert!(Comparison::starts_with(s.clone(), s.clone()).evaluate());
        prop_assert!(Comparison::ends_with(s.clone(), s).evaluate());
    }

    /// Escaped literals always match themselves as regex patterns.
    #[test]
    fn escaped_regex_matches_literal(s in ".{0,20}") {
        let pattern = format!("^{}$", regex::escape(&s));
        let cmp = Comparison::matches(s, &pattern).unwrap();
        prop_assert!(cmp.evaluate());
    }

    /// Desc ordering is the exact reverse of asc ordering.
    #[test]
    fn desc_is_reverse_of_asc(a in any::<i32>(), b in any::<i32>()) {
        let (va, vb) = (Value::from(a), Value::from(b));
        let asc = OrderBy::new("f", Dir::Asc).compare(&va, &vb);
        let desc = OrderBy::new("f", Dir::Desc).compare(&va, &vb);
        prop_assert_eq!(asc.map(Ordering::reverse), desc);
    }

    /// Nulls sort after every non-null value.
    #[test]
    fn nulls_sort_last(n in any::<i64>()) {
        prop_assert_eq!(
            compare_values(&Value::Null, &Value::from(n)),
            Some(Ordering::Greater)
        );
    }

    /// Sorting order is transitive across types, including NaN and nulls.
    #[test]
    fn total_cmp_is_transitive(
        a in value_strategy(),
        b in value_strategy(),
        c in value_strategy(),
    ) {
        if a.total_cmp(&b) != Ordering::Greater && b.total_cmp(&c) != Ordering::Greater {
            prop_assert_ne!(a.total_cmp(&c), Ordering::Greater);
        }
        prop_assert_eq!(a.total_cmp(&b), b.total_cmp(&a).reverse());
    }
}

fn value_strategy() -> impl Strategy<Value = Value<'static>> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        (-3i64..3).prop_map(Value::from),
        (-3i64..3).prop_map(|n| Value::from(n as f64 + 0.5)),
        "[a-c]{0,2}".prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        Just(Value::Null),
    ]
}
