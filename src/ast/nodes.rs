use crate::ast::Token;
use crate::value::{Value, Variables};

/// Node of a parsed rule expression.
///
/// The supported grammar is flat, so a tree is either a single value leaf
/// or one `Equals` node whose children are both leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Variable lookup (`$NAME`)
    Variable(String),

    /// String literal
    String(String),

    /// The `null` literal
    Null,

    /// Equality comparison
    ///
    /// # Example
    /// ```text
    /// $CI_COMMIT_BRANCH == "main"
    /// ```
    Equals { left: Box<Node>, right: Box<Node> },
}

impl Node {
    /// Builds the leaf node for a value token.
    ///
    /// Returns `None` for operators, which can only be built from their
    /// operands through [`Node::equals`].
    pub fn leaf(token: &Token) -> Option<Node> {
        match token {
            Token::Variable(name) => Some(Node::Variable(name.clone())),
            Token::String(s) => Some(Node::String(s.clone())),
            Token::Null => Some(Node::Null),
            Token::Equals => None,
        }
    }

    pub fn equals(left: Node, right: Node) -> Node {
        Node::Equals {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluates the node against a set of variables.
    ///
    /// Unbound variables evaluate to [`Value::Null`]. Equality is plain
    /// value equality: null only equals null, strings only equal identical
    /// strings.
    pub fn evaluate(&self, variables: &Variables) -> Value {
        match self {
            Node::Variable(name) => variables.get(name).cloned().into(),
            Node::String(s) => Value::String(s.clone()),
            Node::Null => Value::Null,
            Node::Equals { left, right } => {
                Value::Boolean(left.evaluate(variables) == right.evaluate(variables))
            }
        }
    }
}
