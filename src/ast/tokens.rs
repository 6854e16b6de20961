use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\$(?<name>[A-Za-z0-9_]+)").expect("variable pattern"));

// Two alternatives because the regex crate does not allow duplicate group names.
static STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\A(?:"(?<double>.+?)"|'(?<single>.+?)')"#).expect("string pattern")
});

static NULL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\Anull").expect("null pattern"));

static EQUALS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A==").expect("equals pattern"));

/// A single lexeme of a pipeline rule expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Variable reference, stored without the leading `$`
    ///
    /// # Examples
    /// ```text
    /// $CI_COMMIT_BRANCH
    /// $DEPLOY_ENABLED
    /// ```
    Variable(String),

    /// String literal enclosed in single or double quotes
    ///
    /// The enclosed text is kept verbatim; there are no escape sequences.
    ///
    /// # Examples
    /// ```text
    /// "main"
    /// 'release'
    /// ```
    String(String),

    /// The `null` keyword
    Null,

    /// Equality operator (`==`)
    Equals,
}

/// Kind tag of a [`Token`], with its payload stripped.
///
/// Grammar validation only ever looks at sequences of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Variable,
    String,
    Null,
    Equals,
}

/// Parser role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Value,
    Operator,
}

impl TokenKind {
    /// Every kind, in the order the lexer tries them.
    pub const PRIORITY: [TokenKind; 4] = [
        TokenKind::Variable,
        TokenKind::String,
        TokenKind::Null,
        TokenKind::Equals,
    ];

    pub fn category(self) -> Category {
        match self {
            TokenKind::Variable | TokenKind::String | TokenKind::Null => Category::Value,
            TokenKind::Equals => Category::Operator,
        }
    }

    /// The pattern recognising this kind, anchored at the start of the input.
    pub fn pattern(self) -> &'static Regex {
        match self {
            TokenKind::Variable => &*VARIABLE,
            TokenKind::String => &*STRING,
            TokenKind::Null => &*NULL,
            TokenKind::Equals => &*EQUALS,
        }
    }

    /// Attempts to read one token of this kind from the start of `input`.
    ///
    /// On success returns the token together with the unconsumed rest of
    /// the input. On mismatch nothing is consumed.
    pub fn try_scan(self, input: &str) -> Option<(Token, &str)> {
        let captures = self.pattern().captures(input)?;
        let matched = captures.get(0)?;

        let token = match self {
            TokenKind::Variable => Token::Variable(captures["name"].to_string()),
            TokenKind::String => {
                let text = captures
                    .name("double")
                    .or_else(|| captures.name("single"))?;
                Token::String(text.as_str().to_string())
            }
            TokenKind::Null => Token::Null,
            TokenKind::Equals => Token::Equals,
        };

        Some((token, &input[matched.end()..]))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Variable => "variable",
            TokenKind::String => "string",
            TokenKind::Null => "null",
            TokenKind::Equals => "equals",
        };
        f.write_str(name)
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Variable(_) => TokenKind::Variable,
            Token::String(_) => TokenKind::String,
            Token::Null => TokenKind::Null,
            Token::Equals => TokenKind::Equals,
        }
    }

    pub fn category(&self) -> Category {
        self.kind().category()
    }

    /// Source form of the token. String literals are always rendered with
    /// double quotes unless the text itself contains one.
    pub fn lexeme(&self) -> String {
        match self {
            Token::Variable(name) => format!("${}", name),
            Token::String(s) if s.contains('"') => format!("'{}'", s),
            Token::String(s) => format!("\"{}\"", s),
            Token::Null => "null".to_string(),
            Token::Equals => "==".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme())
    }
}
