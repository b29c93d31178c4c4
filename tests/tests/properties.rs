// Determinism and round-trip properties over generated expressions.

use proptest::prelude::*;
use tests::{rendered, run};

fn arb_expr() -> impl Strategy<Value = String> {
    // Signs only go on literals: `-(-(1))` renders as `--1.00`, which
    // parses back as `1.00`.
    let leaf = prop_oneof![
        (0u32..500).prop_map(|n| n.to_string()),
        (0u32..500).prop_map(|n| format!("-{n}")),
        (0u32..50, 1u32..99).prop_map(|(i, f)| format!("{i}.{f:02}")),
    ];
    leaf.prop_recursive(5, 40, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "%", "^"]), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (prop::sample::select(vec!["abs", "sin", "cos", "exp", "atan"]), inner)
                .prop_map(|(f, e)| format!("{f}({e})")),
        ]
    })
}

proptest! {
    #[test]
    fn evaluation_is_reproducible(input in arb_expr()) {
        let first = run(&input);
        let second = run(&input);
        match (first.value(), second.value()) {
            (Some(a), Some(b)) => prop_assert_eq!(a.to_bits(), b.to_bits()),
            _ => prop_assert_eq!(first, second),
        }
    }

    #[test]
    fn render_round_trips(input in arb_expr()) {
        let once = rendered(&input).ok_or_else(|| TestCaseError::fail(format!("{input} did not parse")))?;
        let twice = rendered(&once).ok_or_else(|| TestCaseError::fail(format!("{once} did not parse")))?;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unbalanced_parentheses_never_parse(depth in 1usize..20, missing in 1usize..5) {
        let missing = missing.min(depth);
        let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth - missing));
        prop_assert!(run(&input).is_syntax_error());
    }
}
