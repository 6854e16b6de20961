pub mod ast;
pub mod cli;
pub mod lexer;
pub mod parser;
pub mod statement;
pub mod value;

pub use ast::{Category, Node, Token, TokenKind};
pub use lexer::{LexError, Lexer, LexerConfig, MAX_TOKENS};
pub use parser::Parser;
pub use statement::{GRAMMARS, Statement, StatementError};
pub use value::{Value, Variables};

/// Evaluates a rule expression and reports whether it holds.
///
/// Invalid expressions are reported as an error rather than as `false`, so
/// configuration processors can surface them to the author.
///
/// # Examples
///
/// ```
/// use pipeline_rules::{evaluate_rule, Variables};
///
/// let variables = Variables::from([("CI_COMMIT_BRANCH".to_string(), "main".to_string())]);
///
/// assert_eq!(evaluate_rule("$CI_COMMIT_BRANCH", &variables), Ok(true));
/// assert_eq!(evaluate_rule("$UNDEFINED == null", &variables), Ok(true));
/// assert!(evaluate_rule("1 + 1", &variables).is_err());
/// ```
pub fn evaluate_rule(expression: &str, variables: &Variables) -> Result<bool, StatementError> {
    let statement = Statement::new(expression, variables);
    Ok(statement.evaluate()?.is_truthy())
}

/// Checks that an expression lexes and matches a permitted grammar,
/// without any variables.
pub fn validate_rule(expression: &str) -> Result<(), StatementError> {
    let variables = Variables::new();
    match Statement::new(expression, &variables).error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
