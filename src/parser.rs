use crate::ast::{Category, Node, Token};
use std::slice::Iter;

/// Reduces a token stream to a single tree with a shift/combine rule.
///
/// Value tokens are shifted onto a stack as leaves. An operator pops the
/// top of the stack as its left operand and takes the very next token as
/// its right operand. This is only sound for flat `value` and
/// `value operator value` shapes; callers are expected to check the token
/// kinds against the permitted grammars.
pub struct Parser<'a> {
    tokens: Iter<'a, Token>,
    stack: Vec<Node>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens: tokens.iter(),
            stack: Vec::new(),
        }
    }

    /// Takes the next token as an operand, if it is a value.
    ///
    /// An operator in operand position is left in the stream so that every
    /// token is still visited exactly once.
    fn operand(&mut self) -> Option<Node> {
        let next = self.tokens.as_slice().first()?;
        let node = Node::leaf(next)?;
        self.tokens.next();
        Some(node)
    }

    /// Parses the stream. Never fails: missing operands and empty input
    /// fall back to a `null` leaf.
    pub fn parse(mut self) -> Node {
        while let Some(token) = self.tokens.next() {
            match token.category() {
                Category::Value => {
                    if let Some(leaf) = Node::leaf(token) {
                        self.stack.push(leaf);
                    }
                }
                Category::Operator => {
                    let left = self.stack.pop().unwrap_or(Node::Null);
                    let right = self.operand().unwrap_or(Node::Null);
                    self.stack.push(Node::equals(left, right));
                }
            }
        }

        self.stack.pop().unwrap_or(Node::Null)
    }
}

/// Parses a token stream; see [`Parser`].
pub fn parse(tokens: &[Token]) -> Node {
    Parser::new(tokens).parse()
}
