//! Property tests for expression evaluation, the textual form and chains.

use proptest::prelude::*;
use setwise_core::{Chain, Expr, Node, Rule, Verified, and, might_describe, not, or};

fn even() -> Rule<i64> {
    Rule::new("Even", |value: &i64| value % 2 == 0)
}

fn positive() -> Rule<i64> {
    Rule::new("Positive", |value: &i64| *value > 0)
}

fn small() -> Rule<i64> {
    Rule::range("Small", -100..100_i64)
}

fn triple() -> Rule<i64> {
    Rule::new("Triple", |value: &i64| value % 3 == 0)
}

fn arb_expr() -> impl Strategy<Value = Expr<i64>> {
    let leaf = prop_oneof![
        Just(Expr::from(even())),
        Just(Expr::from(positive())),
        Just(Expr::from(small())),
        Just(Expr::from(triple())),
    ];
    leaf.prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a & b),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a | b),
            inner.prop_map(|a| !a),
        ]
    })
}

/// Straightforward re-implementation of the printing grammar.
fn expected_text(expr: &Expr<i64>) -> String {
    match expr.node() {
        Node::Leaf(rule) => rule.id().to_string(),
        Node::Not(inner) => format!("~{}", expected_text(inner)),
        Node::And(left, right) => format!("({} & {})", expected_text(left), expected_text(right)),
        Node::Or(left, right) => format!("({} | {})", expected_text(left), expected_text(right)),
    }
}

proptest! {
    #[test]
    fn prop_and_is_conjunction(a in arb_expr(), b in arb_expr(), value in any::<i64>()) {
        prop_assert_eq!(
            and(&a, &b).evaluate(&value),
            a.evaluate(&value) && b.evaluate(&value)
        );
    }

    #[test]
    fn prop_or_is_disjunction(a in arb_expr(), b in arb_expr(), value in any::<i64>()) {
        prop_assert_eq!(
            or(&a, &b).evaluate(&value),
            a.evaluate(&value) || b.evaluate(&value)
        );
    }

    #[test]
    fn prop_not_is_negation(a in arb_expr(), value in any::<i64>()) {
        prop_assert_eq!(not(&a).evaluate(&value), !a.evaluate(&value));
    }

    #[test]
    fn prop_describe_follows_grammar(expr in arb_expr()) {
        prop_assert_eq!(expr.describe(), expected_text(&expr));
        prop_assert_eq!(expr.describe(), expr.describe());
    }

    #[test]
    fn prop_leaf_membership(value in any::<i64>()) {
        let leaf = Expr::from(even());
        match might_describe(&leaf, value) {
            Ok(verified) => {
                prop_assert!(even().test(&value));
                prop_assert_eq!(verified.into_inner(), value);
            }
            Err(exclusion) => {
                prop_assert!(!even().test(&value));
                prop_assert_eq!(exclusion.expression(), &leaf);
                prop_assert_eq!(*exclusion.value(), value);
            }
        }
    }

    #[test]
    fn prop_evaluation_is_idempotent(expr in arb_expr(), value in any::<i64>()) {
        let first = expr.might_describe(value);
        for _ in 0..3 {
            let again = expr.might_describe(value);
            prop_assert_eq!(first.is_ok(), again.is_ok());
            match (&first, &again) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn prop_chain_collects_failures_in_order(
        values in (any::<i64>(), any::<i64>(), any::<i64>(), any::<i64>(), any::<i64>())
    ) {
        let leaf = Expr::from(even());
        let (a, b, c, d, e) = values;
        let folded = Chain::start(leaf.might_describe(a))
            .then(leaf.might_describe(b))
            .then(leaf.might_describe(c))
            .then(leaf.might_describe(d))
            .then(leaf.might_describe(e))
            .finish();

        let inputs = [a, b, c, d, e];
        let rejected: Vec<i64> = inputs.iter().copied().filter(|v| v % 2 != 0).collect();
        match folded {
            Ok((va, vb, vc, vd, ve)) => {
                prop_assert!(rejected.is_empty());
                let admitted = [va, vb, vc, vd, ve].map(Verified::into_inner);
                prop_assert_eq!(admitted, inputs);
            }
            Err(exclusions) => {
                let excluded: Vec<i64> = exclusions.iter().map(|x| *x.value()).collect();
                prop_assert_eq!(excluded, rejected);
            }
        }
    }

    #[test]
    fn prop_failing_rules_explain_rejection(expr in arb_expr(), value in any::<i64>()) {
        if let Err(exclusion) = expr.might_describe(value) {
            prop_assert!(!exclusion.failing_rules().is_empty());
        }
    }
}

#[test]
fn test_describe_canonical_form() {
    let name = Rule::new("Name", |s: &String| !s.is_empty());
    let bad_name = Rule::new("BadName", |s: &String| s == "Sauron");
    let scottish = Rule::new("ScottishLastName", |s: &String| s.starts_with("Mc"));
    let jewish = Rule::new("JewishLastName", |s: &String| s.ends_with("stein"));

    let expr = (&name & !&bad_name) & (&scottish | &jewish);
    insta::assert_snapshot!(
        expr.describe(),
        @"((Name & ~BadName) & (ScottishLastName | JewishLastName))"
    );

    let nested = !(!(&name | &bad_name) & &jewish);
    insta::assert_snapshot!(nested.describe(), @"~(~(Name | BadName) & JewishLastName)");
}

#[test]
fn test_equality_by_textual_form() {
    // Different predicates, same printed form.
    let a = Rule::new("Positive", |value: &i64| *value > 0) & even();
    let b = Rule::new("Positive", |value: &i64| *value >= 0) & even();
    assert_eq!(a, b);
    assert_ne!(a, even() & positive());
}

#[test]
fn test_shared_expression_across_threads() {
    let expr = (positive() & even()) | small();
    let count_for = |expr: &Expr<i64>, offset: i64| {
        (0..100_i64)
            .filter(|v| expr.evaluate(&(v * 1000 + offset)))
            .count()
    };

    let expected: Vec<usize> = (0..4_i64).map(|offset| count_for(&expr, offset)).collect();
    let handles: Vec<_> = (0..4_i64)
        .map(|offset| {
            let expr = expr.clone();
            std::thread::spawn(move || {
                (0..100_i64)
                    .filter(|v| expr.evaluate(&(v * 1000 + offset)))
                    .count()
            })
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(counts, expected);
    assert!(expected.iter().all(|&count| count > 0));
}
