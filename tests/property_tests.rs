//! Property-based tests for the lexer, cursor, parser and evaluator
//!
//! Expressions are generated from the grammar, so every input here is
//! well formed and must lex, parse and evaluate without error.

use proptest::prelude::*;

use factql::{Cursor, Facts, Parser, Token, Value, evaluate, fact, lex, parse, to_sexpr};

const FIELDS: [&str; 3] = ["a", "b", "c"];

fn field_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(FIELDS.to_vec())
}

fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (1i64..5).prop_map(|n| n.to_string()),
        (1u32..50).prop_map(|n| format!("{}.5", n)),
        prop::sample::select(vec!["x", "y", "item-1"]).prop_map(str::to_string),
    ]
}

fn comparator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["==", "!=", ">=", "<=", ">", "<"])
}

/// Comparisons and membership tests, the leaves of every expression
fn condition_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (field_strategy(), comparator_strategy(), literal_strategy())
            .prop_map(|(f, op, lit)| format!("{} {} {}", f, op, lit)),
        (field_strategy(), prop::collection::vec(literal_strategy(), 1..4))
            .prop_map(|(f, items)| format!("{} in [{}]", f, items.join(" "))),
    ]
}

fn expression_strategy() -> impl Strategy<Value = String> {
    condition_strategy().prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("{} && {}", l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("{} || {}", l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("{} where {}", l, r)),
            inner.prop_map(|e| format!("({})", e)),
        ]
    })
}

fn record_strategy() -> impl Strategy<Value = factql::Fact> {
    (0i64..5, 0i64..5, prop::sample::select(vec!["x", "y", "z"])).prop_map(|(a, b, c)| {
        fact([
            ("a", Value::Integer(a)),
            ("b", Value::Integer(b)),
            ("c", Value::from(c)),
        ])
    })
}

fn facts_strategy() -> impl Strategy<Value = Facts> {
    prop_oneof![
        record_strategy().prop_map(Facts::Single),
        prop::collection::vec(record_strategy(), 0..5).prop_map(Facts::Many),
    ]
}

proptest! {
    #[test]
    fn test_lexer_never_panics(input in "\\PC{0,40}") {
        let _ = lex(&input);
    }

    #[test]
    fn test_generated_expressions_parse(source in expression_strategy()) {
        let tokens = lex(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let first = parse(tokens.clone()).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let second = parse(tokens).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_generated_expressions_evaluate(
        source in expression_strategy(),
        facts in facts_strategy(),
    ) {
        let first = evaluate(&source, &facts);
        prop_assert!(first.is_ok(), "{} failed: {:?}", source, first);
        prop_assert_eq!(first, evaluate(&source, &facts));
    }

    #[test]
    fn test_grouping_does_not_change_verdict(
        source in expression_strategy(),
        facts in facts_strategy(),
    ) {
        let grouped = format!("({})", source);
        prop_assert_eq!(evaluate(&source, &facts), evaluate(&grouped, &facts));
    }

    #[test]
    fn test_where_on_single_fact_is_conjunction(
        subject in condition_strategy(),
        filter in condition_strategy(),
        record in record_strategy(),
    ) {
        let facts = Facts::Single(record);
        let with_where = evaluate(&format!("{} where {}", subject, filter), &facts);
        let with_and = evaluate(&format!("{} && {}", subject, filter), &facts);
        prop_assert_eq!(with_where, with_and);
    }

    #[test]
    fn test_where_over_empty_sequence_is_false(
        subject in condition_strategy(),
        filter in expression_strategy(),
    ) {
        let verdict = evaluate(&format!("{} where {}", subject, filter), &Facts::Many(vec![]));
        prop_assert_eq!(verdict, Ok(false));
    }

    #[test]
    fn test_sexpr_mentions_every_field(source in expression_strategy()) {
        let ast = parse(lex(&source).unwrap()).unwrap();
        let rendered = to_sexpr(&ast);
        for field in FIELDS {
            prop_assert_eq!(
                source.split_whitespace().any(|w| w.trim_start_matches('(') == field),
                rendered.split(|c: char| c == ' ' || c == '(' || c == ')').any(|w| w == field),
            );
        }
    }

    #[test]
    fn test_unmatched_operator_restores_cursor(
        left in condition_strategy(),
        rest in expression_strategy(),
    ) {
        let consumed = lex(&left).unwrap().len();
        let mut parser = Parser::new(lex(&format!("{} where {}", left, rest)).unwrap());
        parser.and().map_err(|e| TestCaseError::fail(e.to_string()))?;
        // Left on the last token of the condition, not on `where`
        prop_assert_eq!(parser.position(), consumed - 1);
    }

    #[test]
    fn test_cursor_stays_in_bounds(
        len in 0usize..8,
        moves in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let tokens: Vec<Token> = (0..len).map(|i| Token::Word(format!("w{}", i))).collect();
        let mut cursor = Cursor::new(tokens);
        for forward in moves {
            if forward {
                cursor.next();
            } else {
                cursor.back();
            }
            prop_assert!(cursor.position() <= len);
            prop_assert_eq!(cursor.current().is_none(), cursor.position() == len);
            prop_assert_eq!(cursor.is_eof(), cursor.position() == len);
        }
    }
}
