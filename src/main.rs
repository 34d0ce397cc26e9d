use clap::{ArgAction, Parser as ClapParser, Subcommand};
use factql::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "factql")]
#[command(about = "factql - test fact records against compact boolean expressions")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression against JSON facts
    Check {
        /// The expression to evaluate
        expression: String,

        /// Facts as JSON, an object or array of objects (reads from stdin if not provided)
        #[arg(short, long)]
        facts: Option<String>,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },

    /// List the tokens an expression lexes to
    Tokens {
        /// The expression to lex
        expression: String,
    },

    /// Print the syntax tree of an expression
    Ast {
        /// The expression to parse
        expression: String,

        /// One operand per line
        #[arg(short, long)]
        pretty: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            expression,
            facts,
            syntax_only,
        } => run_check(expression, facts, syntax_only),
        Commands::Tokens { expression } => {
            cli::render_lexed_tokens(&expression).map(|out| println!("{}", out))
        }
        Commands::Ast { expression, pretty } => {
            cli::render_ast(&expression, pretty).map(|out| println!("{}", out))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    expression: String,
    facts: Option<String>,
    syntax_only: bool,
) -> Result<(), CliError> {
    let facts = match facts {
        Some(s) => Some(s),
        None if !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        expression,
        facts,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Verdict(verdict) => println!("{}", verdict),
    }
    Ok(())
}
