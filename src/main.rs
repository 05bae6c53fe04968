//! The Lox interpreter CLI.
//!
//! This binary provides the `tokenize`, `parse`, `evaluate`, and `run`
//! (aliased `interpret`) subcommands and delegates to the library crate
//! for every stage of the pipeline.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser as ClapParser, Subcommand};
use log::{Level, debug, trace};

use loxo::diagnostics;
use loxo::interpreter::Interpreter;
use loxo::lexer::Lexer;
use loxo::parser::Parser;
use loxo::printer;
use loxo::value::format_number;

/// Command-line interface for the Lox interpreter.
#[derive(ClapParser)]
#[command(name = "loxo")]
#[command(about = "A tree-walking interpreter for Lox", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Scan a source file and print its token stream.
    Tokenize {
        /// The source file to tokenize (e.g., `hello.lox`).
        file: PathBuf,
    },
    /// Parse a single expression and print its AST in parenthesized prefix form.
    Parse {
        /// The source file holding a single expression (e.g., `hello.lox`).
        file: PathBuf,
    },
    /// Evaluate a single expression and print its value.
    Evaluate {
        /// The source file holding a single expression (e.g., `hello.lox`).
        file: PathBuf,
    },
    /// Run a source file as a full program.
    #[command(alias = "interpret")]
    Run {
        /// The source file to run (e.g., `hello.lox`).
        file: PathBuf,
    },
}

const EXIT_USAGE_ERROR: u8 = 1;
const EXIT_DATA_ERROR: u8 = 65;
const EXIT_SOFTWARE_ERROR: u8 = 70;

fn main() -> ExitCode {
    simple_logger::init_with_level(Level::Warn).expect("logger should only be initialized once");

    let cli = Cli::parse();

    match cli.command {
        Commands::Tokenize { file } => run_tokenize(&file),
        Commands::Parse { file } => run_parse(&file),
        Commands::Evaluate { file } => run_evaluate(&file),
        Commands::Run { file } => run_interpret(&file),
    }
}

fn read_source(file: &PathBuf) -> Result<String, ExitCode> {
    std::fs::read_to_string(file).map_err(|error| {
        eprintln!("Error reading '{}': {}", file.display(), error);
        ExitCode::from(EXIT_USAGE_ERROR)
    })
}

fn run_tokenize(file: &PathBuf) -> ExitCode {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let filename = file.to_string_lossy();

    let mut lexer = Lexer::new(&source);
    let tokens = lexer.tokenize();
    debug!(
        "lexer finished with {} tokens, {} errors",
        tokens.len(),
        lexer.errors().len()
    );

    for token in &tokens {
        if matches!(token.kind, loxo::token::TokenKind::Error(_)) {
            continue;
        }
        println!("{}", format_token(token));
    }

    if lexer.errors().is_empty() {
        ExitCode::SUCCESS
    } else {
        for error in lexer.errors() {
            diagnostics::report_lex_error(&filename, &source, error);
        }
        ExitCode::from(EXIT_DATA_ERROR)
    }
}

fn format_token(token: &loxo::token::Token) -> String {
    use loxo::token::TokenKind;

    let literal = match &token.kind {
        TokenKind::StringLiteral(s) => s.clone(),
        TokenKind::NumberLiteral(n) => loxo::value::format_number_literal(*n),
        _ => "null".to_string(),
    };

    format!("{} {} {}", token.kind.display_name(), token.lexeme, literal)
}

fn run_parse(file: &PathBuf) -> ExitCode {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let filename = file.to_string_lossy();

    let mut lexer = Lexer::new(&source);
    let tokens = lexer.tokenize();
    debug!(
        "lexer finished with {} tokens, {} errors",
        tokens.len(),
        lexer.errors().len()
    );
    if !lexer.errors().is_empty() {
        for error in lexer.errors() {
            diagnostics::report_lex_error(&filename, &source, error);
        }
        return ExitCode::from(EXIT_DATA_ERROR);
    }

    let mut parser = Parser::new(tokens);
    let expr = match parser.parse_expression_only() {
        Ok(expr) => expr,
        Err(error) => {
            trace!("parser finished with 0 statements, 1 error");
            diagnostics::report_parse_error(&filename, &source, &error);
            return ExitCode::from(EXIT_DATA_ERROR);
        }
    };
    trace!("parser finished with 1 expression, 0 errors");

    println!("{}", printer::print_expr(&expr));
    ExitCode::SUCCESS
}

fn run_evaluate(file: &PathBuf) -> ExitCode {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let filename = file.to_string_lossy();

    let mut lexer = Lexer::new(&source);
    let tokens = lexer.tokenize();
    debug!(
        "lexer finished with {} tokens, {} errors",
        tokens.len(),
        lexer.errors().len()
    );
    if !lexer.errors().is_empty() {
        for error in lexer.errors() {
            diagnostics::report_lex_error(&filename, &source, error);
        }
        return ExitCode::from(EXIT_DATA_ERROR);
    }

    let mut parser = Parser::new(tokens);
    let expr = match parser.parse_expression_only() {
        Ok(expr) => expr,
        Err(error) => {
            trace!("parser finished with 0 statements, 1 error");
            diagnostics::report_parse_error(&filename, &source, &error);
            return ExitCode::from(EXIT_DATA_ERROR);
        }
    };
    trace!("parser finished with 1 expression, 0 errors");

    debug!("evaluator starting");
    let mut interpreter = Interpreter::new();
    match interpreter.evaluate_expression(&expr) {
        Ok(value) => {
            println!("{}", format_value(&value));
            ExitCode::SUCCESS
        }
        Err(error) => {
            diagnostics::report_runtime_error(&filename, &source, &error, None);
            ExitCode::from(EXIT_SOFTWARE_ERROR)
        }
    }
}

fn format_value(value: &loxo::value::Value) -> String {
    match value {
        loxo::value::Value::Number(n) => format_number(*n),
        other => other.to_string(),
    }
}

fn run_interpret(file: &PathBuf) -> ExitCode {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let filename = file.to_string_lossy();

    let mut lexer = Lexer::new(&source);
    let tokens = lexer.tokenize();
    debug!(
        "lexer finished with {} tokens, {} errors",
        tokens.len(),
        lexer.errors().len()
    );
    if !lexer.errors().is_empty() {
        for error in lexer.errors() {
            diagnostics::report_lex_error(&filename, &source, error);
        }
        return ExitCode::from(EXIT_DATA_ERROR);
    }

    let (program, parse_errors) = Parser::new(tokens).parse();
    trace!(
        "parser finished with {} statements, {} errors",
        program.len(),
        parse_errors.len()
    );
    if !parse_errors.is_empty() {
        for error in &parse_errors {
            diagnostics::report_parse_error(&filename, &source, error);
        }
        return ExitCode::from(EXIT_DATA_ERROR);
    }

    debug!("evaluator starting");
    let mut interpreter = Interpreter::new();
    match interpreter.interpret(&program) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            diagnostics::report_runtime_error(&filename, &source, &error, None);
            ExitCode::from(EXIT_SOFTWARE_ERROR)
        }
    }
}
