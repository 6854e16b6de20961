//! Validate and evaluate rule expressions

use super::{CliError, env_to_variables, json_to_variables};
use crate::{LexerConfig, Statement, Value, Variables};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The rule expression to check
    pub expression: String,
    /// JSON object of variables
    pub variables: Option<String>,
    /// Also bind the process environment (JSON variables take precedence)
    pub use_env: bool,
    /// Lexer tuning
    pub lexer: LexerConfig,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Expression evaluated to `value`
    Evaluated { value: Value, truthful: bool },
}

fn collect_variables(options: &CheckOptions) -> Result<Variables, CliError> {
    let mut variables = if options.use_env {
        env_to_variables(std::env::vars())
    } else {
        Variables::new()
    };

    if let Some(json) = &options.variables {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        variables.extend(json_to_variables(parsed)?);
    }

    Ok(variables)
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let variables = if options.syntax_only {
        Variables::new()
    } else {
        collect_variables(options)?
    };

    let statement = Statement::with_config(options.expression.as_str(), &variables, options.lexer);

    if options.syntax_only {
        return match statement.error() {
            None => Ok(CheckResult::SyntaxValid),
            Some(e) => Err(e.into()),
        };
    }

    let value = statement.evaluate()?;
    log::debug!("{:?} evaluated to {}", statement.text(), value);

    Ok(CheckResult::Evaluated {
        truthful: value.is_truthy(),
        value,
    })
}
