// tests/statement_tests.rs

use pipeline_rules::ast::TokenKind;
use pipeline_rules::lexer::{LexError, LexerConfig};
use pipeline_rules::statement::{GRAMMARS, Statement, StatementError};
use pipeline_rules::value::{Value, Variables};

fn vars(pairs: &[(&str, &str)]) -> Variables {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn eval(text: &str, variables: &Variables) -> Result<Value, StatementError> {
    Statement::new(text, variables).evaluate()
}

// ============================================================================
// Grammar Whitelist
// ============================================================================

#[test]
fn test_permitted_grammars_are_valid() {
    let variables = Variables::new();
    let test_cases = vec![
        "$A",
        "$A == 'x'",
        "$A == $B",
        "$A == null",
        "\"x\" == $A",
        "null == $A",
    ];

    for text in test_cases {
        assert!(Statement::new(text, &variables).valid(), "Failed for: {}", text);
    }
}

#[test]
fn test_token_kinds() {
    let variables = Variables::new();
    let statement = Statement::new("$A == 'x'", &variables);
    assert_eq!(
        statement.token_kinds(),
        Ok(vec![TokenKind::Variable, TokenKind::Equals, TokenKind::String])
    );
}

#[test]
fn test_other_sequences_are_rejected() {
    let variables = vars(&[("A", "x")]);
    let test_cases = vec![
        "",
        "   ",
        "'x'",
        "null",
        "==",
        "$A ==",
        "== $A",
        "$A $B",
        "$A == 'x' == 'y'",
        "'x' == 'x'",
        "null == null",
        "'x' == null",
        "null == 'x'",
        "$A == == $B",
    ];

    for text in test_cases {
        let statement = Statement::new(text, &variables);
        assert!(!statement.valid(), "Accepted: {:?}", text);
        assert!(
            matches!(statement.evaluate(), Err(StatementError::UnknownGrammar { .. })),
            "Evaluated: {:?}",
            text
        );
        assert!(!statement.truthful(), "Truthful: {:?}", text);
    }
}

#[test]
fn test_grammar_closure_over_short_sequences() {
    use TokenKind::*;
    let sources = [
        (Variable, "$A"),
        (String, "'s'"),
        (Null, "null"),
        (Equals, "=="),
    ];
    let variables = Variables::new();

    for a in &sources {
        for b in &sources {
            for c in &sources {
                let triple = [a, b, c];
                for len in 1..=3 {
                    let picked = &triple[..len];
                    let kinds: Vec<TokenKind> = picked.iter().map(|(k, _)| *k).collect();
                    let text: Vec<&str> = picked.iter().map(|(_, s)| *s).collect();

                    let statement = Statement::new(text.join(" "), &variables);
                    let permitted = GRAMMARS.contains(&kinds.as_slice());
                    assert_eq!(statement.valid(), permitted, "Mismatch for {:?}", kinds);
                }
            }
        }
    }
}

#[test]
fn test_lex_errors_are_reported() {
    let variables = Variables::new();
    let statement = Statement::new("$A + 1", &variables);

    assert!(!statement.valid());
    assert_eq!(
        statement.error(),
        Some(StatementError::Lex(LexError::UnknownLexeme {
            position: 3,
            found: '+'
        }))
    );
}

#[test]
fn test_custom_lexer_config() {
    let variables = Variables::new();
    let config = LexerConfig { max_tokens: 2 };
    let statement = Statement::with_config("$A == null", &variables, config);

    assert_eq!(
        statement.evaluate(),
        Err(StatementError::Lex(LexError::TooManyTokens { limit: 2 }))
    );
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_bare_variable_evaluates_to_value() {
    let variables = vars(&[("A", "x"), ("EMPTY", "")]);

    assert_eq!(eval("$A", &variables), Ok(Value::String("x".into())));
    assert_eq!(eval("$EMPTY", &variables), Ok(Value::String("".into())));
    assert_eq!(eval("$MISSING", &variables), Ok(Value::Null));
}

#[test]
fn test_bare_variable_truthiness() {
    let variables = vars(&[("A", "x"), ("EMPTY", "")]);

    assert!(Statement::new("$A", &variables).truthful());
    assert!(!Statement::new("$EMPTY", &variables).truthful());
    assert!(!Statement::new("$MISSING", &variables).truthful());
}

#[test]
fn test_equality_with_string() {
    let variables = vars(&[("BRANCH", "main")]);

    assert_eq!(eval("$BRANCH == 'main'", &variables), Ok(Value::Boolean(true)));
    assert_eq!(eval("$BRANCH == \"main\"", &variables), Ok(Value::Boolean(true)));
    assert_eq!(eval("'main' == $BRANCH", &variables), Ok(Value::Boolean(true)));
    assert_eq!(eval("$BRANCH == 'Main'", &variables), Ok(Value::Boolean(false)));
    assert_eq!(eval("$BRANCH == 'main '", &variables), Ok(Value::Boolean(false)));
    assert_eq!(eval("$OTHER == 'main'", &variables), Ok(Value::Boolean(false)));
}

#[test]
fn test_equality_with_null() {
    let variables = vars(&[("SET", "x"), ("EMPTY", "")]);

    assert_eq!(eval("$UNSET == null", &variables), Ok(Value::Boolean(true)));
    assert_eq!(eval("null == $UNSET", &variables), Ok(Value::Boolean(true)));
    assert_eq!(eval("$SET == null", &variables), Ok(Value::Boolean(false)));
    assert_eq!(eval("$EMPTY == null", &variables), Ok(Value::Boolean(false)));
}

#[test]
fn test_equality_between_variables() {
    let variables = vars(&[("A", "x"), ("B", "y"), ("C", "x")]);

    assert_eq!(eval("$A == $B", &variables), Ok(Value::Boolean(false)));
    assert_eq!(eval("$A == $C", &variables), Ok(Value::Boolean(true)));
    assert_eq!(eval("$U1 == $U2", &variables), Ok(Value::Boolean(true)));
    assert_eq!(eval("$A == $U1", &variables), Ok(Value::Boolean(false)));
}

#[test]
fn test_variable_names_are_case_sensitive() {
    let variables = vars(&[("branch", "main")]);
    assert_eq!(eval("$BRANCH == null", &variables), Ok(Value::Boolean(true)));
}

#[test]
fn test_false_comparison_is_not_truthful() {
    let variables = vars(&[("A", "x")]);
    assert!(!Statement::new("$A == 'y'", &variables).truthful());
    assert!(Statement::new("$A == 'x'", &variables).truthful());
}

// ============================================================================
// Caching
// ============================================================================

#[test]
fn test_repeated_queries_are_stable() {
    let variables = vars(&[("A", "x")]);
    let statement = Statement::new("$A == 'x'", &variables);

    for _ in 0..3 {
        assert!(statement.valid());
        assert_eq!(statement.evaluate(), Ok(Value::Boolean(true)));
        assert!(statement.truthful());
    }
    assert_eq!(statement.tokens().map(|t| t.len()), Ok(3));
}

#[test]
fn test_repeated_validation_of_invalid_statement() {
    let variables = Variables::new();
    let statement = Statement::new("'a' == 'b'", &variables);

    let first = statement.error();
    assert!(first.is_some());
    assert_eq!(statement.error(), first);
    assert!(!statement.valid());
}
