// tests/cli_tests.rs

use factql::cli::{
    CheckOptions, CheckResult, CliError, execute_check, json_to_facts, json_to_value,
    render_ast, render_lexed_tokens,
};
use factql::{Error, Facts, ParseError, Value};
use serde_json::json;

fn check(expression: &str, facts: Option<&str>) -> Result<CheckResult, CliError> {
    execute_check(&CheckOptions {
        expression: expression.to_string(),
        facts: facts.map(str::to_string),
        syntax_only: false,
    })
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_against_object() {
    let result = check("a == 1 && b in [x y]", Some(r#"{"a": 1, "b": "y"}"#)).unwrap();
    assert_eq!(result, CheckResult::Verdict(true));

    let result = check("a == 1", Some(r#"{"a": 2}"#)).unwrap();
    assert_eq!(result, CheckResult::Verdict(false));
}

#[test]
fn test_check_against_array() {
    let facts = r#"[{"a": 1, "b": 3}, {"a": 1, "b": 2}]"#;
    assert_eq!(
        check("a == 1 where b == 2", Some(facts)).unwrap(),
        CheckResult::Verdict(true)
    );
    assert_eq!(
        check("a == 2 where b == 2", Some(facts)).unwrap(),
        CheckResult::Verdict(false)
    );
}

#[test]
fn test_syntax_only_skips_facts() {
    let options = CheckOptions {
        expression: "(a == 1 || b < 2) where c >= 3".to_string(),
        facts: None,
        syntax_only: true,
    };
    assert_eq!(execute_check(&options).unwrap(), CheckResult::SyntaxValid);
}

#[test]
fn test_syntax_only_still_reports_errors() {
    let options = CheckOptions {
        expression: "(a == 1".to_string(),
        syntax_only: true,
        ..Default::default()
    };
    let err = execute_check(&options).unwrap_err();
    assert!(matches!(
        err,
        CliError::Query(Error::Parse(ParseError::ExpectedKeyword { .. }))
    ));
    assert_eq!(err.to_string(), "Parse error: Expected ')', found end of input");
}

#[test]
fn test_missing_facts() {
    let err = check("a == 1", None).unwrap_err();
    assert!(matches!(err, CliError::NoInput));
}

#[test]
fn test_malformed_json() {
    let err = check("a == 1", Some("{a: 1}")).unwrap_err();
    assert!(matches!(err, CliError::Json(_)));
    assert!(err.to_string().starts_with("Invalid JSON:"));
}

#[test]
fn test_lex_error_message_passes_through() {
    let err = check("a && 1 2", Some("{}")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "ERROR: '1 2' forms an illegal combination outside of a list\nCode:\n\ta && 1 2"
    );
}

// ============================================================================
// JSON conversion
// ============================================================================

#[test]
fn test_json_scalars() {
    assert_eq!(json_to_value(json!(null)), Some(Value::Null));
    assert_eq!(json_to_value(json!(true)), Some(Value::Boolean(true)));
    assert_eq!(json_to_value(json!(7)), Some(Value::Integer(7)));
    assert_eq!(json_to_value(json!(1.5)), Some(Value::Float(1.5)));
    assert_eq!(json_to_value(json!("x")), Some(Value::String("x".to_string())));
    assert_eq!(json_to_value(json!([1])), None);
    assert_eq!(json_to_value(json!({"a": 1})), None);
}

#[test]
fn test_json_object_is_single_fact() {
    let facts = json_to_facts(json!({"a": 1, "b": "two"})).unwrap();
    let Facts::Single(fact) = facts else {
        panic!("Expected a single fact");
    };
    assert_eq!(fact.get("a"), Some(&Value::Integer(1)));
    assert_eq!(fact.get("b"), Some(&Value::String("two".to_string())));
}

#[test]
fn test_json_array_is_sequence() {
    let facts = json_to_facts(json!([{"a": 1}, {"a": 2}, {}])).unwrap();
    assert!(matches!(facts, Facts::Many(ref records) if records.len() == 3));

    let facts = json_to_facts(json!([])).unwrap();
    assert!(facts.is_empty());
}

#[test]
fn test_nested_field_rejected() {
    let err = json_to_facts(json!({"a": {"b": 1}})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid facts: field 'a' holds an object; fact values must be scalars"
    );
}

#[test]
fn test_non_object_rejected() {
    let err = json_to_facts(json!(42)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid facts: expected an object, found number");

    let err = json_to_facts(json!([{"a": 1}, "b"])).unwrap_err();
    assert!(matches!(err, CliError::InvalidFacts(_)));
}

// ============================================================================
// tokens / ast
// ============================================================================

#[test]
fn test_render_tokens() {
    let out = render_lexed_tokens("a in [1 x]").unwrap();
    assert_eq!(
        out,
        "Word     a\nKeyword  in\nKeyword  [\nNumber   1\nWord     x\nKeyword  ]"
    );
}

#[test]
fn test_render_ast() {
    let out = render_ast("a == 1 where (b in [2 3])", false).unwrap();
    assert_eq!(out, "(where (== a 1) (group (in b [2 3])))");
}

#[test]
fn test_render_ast_pretty() {
    let out = render_ast("a == 1 && b != 2", true).unwrap();
    assert_eq!(out, "(&&\n  (== a 1)\n  (!= b 2))");
}

#[test]
fn test_render_ast_error() {
    assert!(render_ast("a ==", false).is_err());
    assert!(render_lexed_tokens("a $ b").is_err());
}
