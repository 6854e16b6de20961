//! Variable sources: JSON documents and the process environment

use super::CliError;
use crate::Variables;

fn type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Convert a JSON object of string values to [`Variables`].
///
/// `null` values leave the variable unbound.
pub fn json_to_variables(v: serde_json::Value) -> Result<Variables, CliError> {
    let obj = match v {
        serde_json::Value::Object(obj) => obj,
        other => return Err(CliError::NotAnObject(type_name(&other))),
    };

    let mut variables = Variables::new();
    for (name, value) in obj {
        match value {
            serde_json::Value::String(s) => {
                variables.insert(name, s);
            }
            serde_json::Value::Null => {}
            other => {
                return Err(CliError::InvalidVariable {
                    name,
                    found: type_name(&other),
                });
            }
        }
    }
    Ok(variables)
}

/// Collect variables from `(name, value)` pairs such as [`std::env::vars`].
pub fn env_to_variables(vars: impl IntoIterator<Item = (String, String)>) -> Variables {
    vars.into_iter().collect()
}
