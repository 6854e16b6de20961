use std::collections::HashMap;
use std::fmt;

/// Variables available to a rule, keyed by name without the leading `$`.
///
/// Names are case-sensitive. A name missing from the map is unbound and
/// evaluates to [`Value::Null`].
pub type Variables = HashMap<String, String>;

/// Result of evaluating a rule expression.
///
/// # Examples
///
/// ```
/// use pipeline_rules::Value;
///
/// assert!(Value::String("main".to_string()).is_truthy());
/// assert!(!Value::String(String::new()).is_truthy());
/// assert!(!Value::Null.is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Absent value: an unbound variable or the `null` literal
    Null,

    /// Variable value or string literal
    String(String),

    /// Outcome of a comparison
    Boolean(bool),
}

impl Value {
    /// Check if the value is truthy (for rule conditions)
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            Value::Boolean(b) => *b,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map(Value::String).unwrap_or(Value::Null)
    }
}
