use crate::ast::{Token, TokenKind};
use thiserror::Error;

/// Default ceiling on lexing iterations for one expression.
pub const MAX_TOKENS: usize = 100;

/// Errors raised while splitting an expression into tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The input at `position` matches none of the token patterns
    #[error("unknown lexeme found at position {position}: '{found}'")]
    UnknownLexeme { position: usize, found: char },

    /// The input did not end within the configured number of iterations
    #[error("too many tokens (limit is {limit})")]
    TooManyTokens { limit: usize },
}

/// Lexer tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Number of scan iterations allowed before giving up. Reaching the end
    /// of the input takes an iteration of its own.
    pub max_tokens: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            max_tokens: MAX_TOKENS,
        }
    }
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    pub fn with_config(input: &'a str, config: LexerConfig) -> Self {
        Lexer {
            input,
            position: 0,
            config,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.position += rest.len() - rest.trim_start().len();
    }

    /// Reads the next token, or `None` once only whitespace is left.
    ///
    /// Kinds are tried in [`TokenKind::PRIORITY`] order and the first match
    /// wins. Unrecognised input is an error; nothing is skipped.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let rest = self.remaining();
        let Some(found) = rest.chars().next() else {
            return Ok(None);
        };

        for kind in TokenKind::PRIORITY {
            if let Some((token, after)) = kind.try_scan(rest) {
                self.position = self.input.len() - after.len();
                return Ok(Some(token));
            }
        }

        Err(LexError::UnknownLexeme {
            position: self.position,
            found,
        })
    }

    /// Splits the whole input into tokens.
    ///
    /// Empty or whitespace-only input yields an empty stream.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        for _ in 0..self.config.max_tokens {
            match self.next_token()? {
                Some(token) => tokens.push(token),
                None => {
                    log::trace!("lexed {} token(s) from {:?}", tokens.len(), self.input);
                    return Ok(tokens);
                }
            }
        }

        log::debug!(
            "giving up on {:?} after {} iterations",
            self.input,
            self.config.max_tokens
        );
        Err(LexError::TooManyTokens {
            limit: self.config.max_tokens,
        })
    }
}

#[test]
fn test_keywords_and_operators() {
    let mut lexer = Lexer::new("null == $A");
    assert_eq!(lexer.next_token(), Ok(Some(Token::Null)));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Equals)));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Variable("A".to_string()))));
    assert_eq!(lexer.next_token(), Ok(None));
}

#[test]
fn test_unknown_lexeme_does_not_advance() {
    let mut lexer = Lexer::new("  + 1");
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnknownLexeme {
            position: 2,
            found: '+'
        })
    );
    assert_eq!(lexer.position, 2);
}
