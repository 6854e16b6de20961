//! # Pipeline Rule Expressions - Tokens and Syntax Tree
//!
//! Rule expressions gate whether a CI/CD job or stage runs. The language is
//! deliberately tiny:
//!
//! ```text
//! $CI_COMMIT_BRANCH
//! $CI_COMMIT_BRANCH == "main"
//! $CI_MERGE_REQUEST_ID == null
//! $SOURCE_BRANCH == $TARGET_BRANCH
//! ```
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexemes, their kinds and the patterns that recognise them
//! - **[nodes]** - Tree nodes built by the parser and their evaluation
//!
//! ## Token Kinds
//!
//! | Kind | Source | Category |
//! |---|---|---|
//! | Variable | `$NAME` | value |
//! | String | `"text"` or `'text'` | value |
//! | Null | `null` | value |
//! | Equals | `==` | operator |
//!
//! There is no arithmetic, no boolean connectives, no parentheses and no
//! function calls.
pub mod nodes;
pub mod tokens;

pub use nodes::Node;
pub use tokens::{Category, Token, TokenKind};
