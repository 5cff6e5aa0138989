//! CLI tool to inspect how SQL files tokenize.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pgsql_lex::{ParserContext, Token, concat_text, declared_names, tokenize};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pgsql-lex", version)]
#[command(about = "Tokenize PostgreSQL SQL files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tokens of each file
    Tokens {
        /// Include whitespace and comments
        #[arg(long)]
        all: bool,
        /// Print a JSON array instead of one token per line
        #[arg(long)]
        json: bool,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Check that each file tokenizes losslessly
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List objects declared by CREATE statements
    Names {
        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let files = match &cli.command {
        Command::Tokens { files, .. } | Command::Check { files } | Command::Names { files, .. } => {
            files
        }
    };

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                had_error = true;
                continue;
            }
        };

        let result = match &cli.command {
            Command::Tokens { all, json, .. } => print_tokens(&content, *all, *json),
            Command::Check { .. } => check(path, &content),
            Command::Names { json, .. } => print_names(&content, *json),
        };

        if let Err(message) = result {
            eprintln!("{}: {message}", path.display());
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_tokens(content: &str, all: bool, json: bool) -> Result<(), String> {
    let tokens = tokenize(content).map_err(|e| e.to_string())?;
    let shown: Vec<&Token<'_>> = tokens.iter().filter(|t| all || t.is_significant()).collect();

    if json {
        let out = serde_json::to_string_pretty(&shown).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    for token in shown {
        println!(
            "{}:{} {:?} {:?}",
            token.line,
            token.column,
            token.kind,
            token.text()
        );
    }
    Ok(())
}

fn check(path: &Path, content: &str) -> Result<(), String> {
    let tokens = tokenize(content).map_err(|e| e.to_string())?;
    if concat_text(&tokens) != content {
        return Err("tokens do not reproduce the source".to_string());
    }
    println!("{}: ok ({} tokens)", path.display(), tokens.len());
    Ok(())
}

fn print_names(content: &str, json: bool) -> Result<(), String> {
    let mut context = ParserContext::from_source(content).map_err(|e| e.to_string())?;
    let names = declared_names(&mut context);

    if json {
        let out = serde_json::to_string_pretty(&names).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    for declared in &names {
        println!(
            "{}:{} {} {}",
            declared.line, declared.column, declared.object, declared.name
        );
    }
    Ok(())
}
