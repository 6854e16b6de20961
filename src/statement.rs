//! Rule statements: lexing, grammar validation and evaluation of one
//! expression against one set of variables.

use crate::ast::{Node, Token, TokenKind};
use crate::lexer::{LexError, Lexer, LexerConfig};
use crate::parser;
use crate::value::{Value, Variables};
use once_cell::unsync::OnceCell;
use thiserror::Error;

use crate::ast::TokenKind::{Equals, Null, String as Str, Variable};

/// The only token-kind sequences a statement may consist of.
pub const GRAMMARS: [&[TokenKind]; 6] = [
    &[Variable],
    &[Variable, Equals, Str],
    &[Variable, Equals, Variable],
    &[Variable, Equals, Null],
    &[Str, Equals, Variable],
    &[Null, Equals, Variable],
];

/// Reasons a statement is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Lexing succeeded but the token kinds match no permitted grammar
    #[error("unknown pipeline expression grammar: [{}]", format_kinds(.kinds))]
    UnknownGrammar { kinds: Vec<TokenKind> },
}

fn format_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One rule expression bound to the variables it is evaluated against.
///
/// Lexing and parsing happen at most once per statement and the results
/// are cached, so repeated calls to [`valid`](Statement::valid),
/// [`evaluate`](Statement::evaluate) and friends are cheap and consistent.
///
/// # Examples
///
/// ```
/// use pipeline_rules::{Statement, Value, Variables};
///
/// let mut variables = Variables::new();
/// variables.insert("CI_COMMIT_BRANCH".to_string(), "main".to_string());
///
/// let statement = Statement::new(r#"$CI_COMMIT_BRANCH == "main""#, &variables);
/// assert!(statement.valid());
/// assert_eq!(statement.evaluate(), Ok(Value::Boolean(true)));
/// assert!(statement.truthful());
/// ```
pub struct Statement<'v> {
    text: String,
    variables: &'v Variables,
    config: LexerConfig,
    tokens: OnceCell<Result<Vec<Token>, LexError>>,
    tree: OnceCell<Result<Node, StatementError>>,
}

impl<'v> Statement<'v> {
    pub fn new(text: impl Into<String>, variables: &'v Variables) -> Self {
        Self::with_config(text, variables, LexerConfig::default())
    }

    pub fn with_config(text: impl Into<String>, variables: &'v Variables, config: LexerConfig) -> Self {
        Statement {
            text: text.into(),
            variables,
            config,
            tokens: OnceCell::new(),
            tree: OnceCell::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The lexed token stream.
    pub fn tokens(&self) -> Result<&[Token], StatementError> {
        self.tokens
            .get_or_init(|| Lexer::with_config(&self.text, self.config).tokenize())
            .as_deref()
            .map_err(|e| StatementError::Lex(e.clone()))
    }

    /// The token stream reduced to kind tags, as used for grammar matching.
    pub fn token_kinds(&self) -> Result<Vec<TokenKind>, StatementError> {
        Ok(self.tokens()?.iter().map(Token::kind).collect())
    }

    /// The syntax tree, available only for statements matching a
    /// permitted grammar.
    pub fn parse_tree(&self) -> Result<&Node, StatementError> {
        self.tree
            .get_or_init(|| {
                let tokens = self.tokens()?;
                let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();

                if !GRAMMARS.iter().any(|grammar| *grammar == kinds.as_slice()) {
                    log::debug!("rejecting {:?}: no grammar matches {:?}", self.text, kinds);
                    return Err(StatementError::UnknownGrammar { kinds });
                }

                Ok(parser::parse(tokens))
            })
            .as_ref()
            .map_err(|e| e.clone())
    }

    /// Evaluates the statement against its variables.
    pub fn evaluate(&self) -> Result<Value, StatementError> {
        Ok(self.parse_tree()?.evaluate(self.variables))
    }

    /// Whether the statement evaluates to a present value. Invalid
    /// statements are never truthful.
    pub fn truthful(&self) -> bool {
        self.evaluate().is_ok_and(|value| value.is_truthy())
    }

    pub fn valid(&self) -> bool {
        self.parse_tree().is_ok()
    }

    /// Why the statement is invalid, if it is.
    pub fn error(&self) -> Option<StatementError> {
        self.parse_tree().err()
    }
}
