use clap::{Parser as ClapParser, Subcommand};
use pipeline_rules::LexerConfig;
use pipeline_rules::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};
use std::process::ExitCode;

#[derive(ClapParser)]
#[command(name = "rules")]
#[command(about = "Validate and evaluate CI/CD pipeline rule expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and evaluate a rule expression
    ///
    /// Exits 0 when the expression holds, 1 when it does not and 2 when it
    /// is invalid.
    Check {
        /// The rule expression, e.g. '$CI_COMMIT_BRANCH == "main"'
        expression: String,

        /// JSON object of variables (reads from stdin if piped and not provided)
        #[arg(short, long)]
        vars: Option<String>,

        /// Bind the process environment as variables
        #[arg(short, long)]
        env: bool,

        /// Lexing iteration ceiling
        #[arg(long, default_value_t = pipeline_rules::MAX_TOKENS)]
        max_tokens: usize,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            expression,
            vars,
            env,
            max_tokens,
            syntax_only,
        } => run_check(expression, vars, env, max_tokens, syntax_only),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
    }
}

fn run_check(
    expression: String,
    vars: Option<String>,
    env: bool,
    max_tokens: usize,
    syntax_only: bool,
) -> Result<ExitCode, CliError> {
    let vars = match vars {
        Some(s) => Some(s),
        None if !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer).filter(|b| !b.trim().is_empty())
        }
        None => None,
    };

    let options = CheckOptions {
        expression,
        variables: vars,
        use_env: env,
        lexer: LexerConfig { max_tokens },
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => {
            println!("Syntax is valid");
            Ok(ExitCode::SUCCESS)
        }
        CheckResult::Evaluated { value, truthful } => {
            println!("{}", value);
            Ok(if truthful {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
