use clap::Parser; // clap crate for CLI argument parsing
use lexer::LexicalError;
use model::{Program, Token};
use parser::ParseError;
use snafu::{ResultExt, Snafu};
use std::{fs, io, process::ExitCode};
use visitor::EvaluationError;

/*
Each phase error is reported as a header line naming the phase, followed
by the phase's own message on the next line. Nothing is written to stdout
once a phase has failed.
*/

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the source file; standard input is read when absent or `-`
    input_path: Option<String>,

    /// Run lexer only and dump the tokens
    #[arg(short, long)]
    lex: bool,

    /// Run lexer and parser only
    #[arg(short, long)]
    parse: bool,
}

#[derive(Debug, Snafu)]
enum DriverError {
    #[snafu(display("Cannot read {path}\n{source}"))]
    Read { path: String, source: io::Error },

    #[snafu(display("Lexical error\n{source}"))]
    Lex { source: LexicalError },

    #[snafu(display("Parse error\n{source}"))]
    Parse { source: ParseError },

    #[snafu(display("Evaluation error\n{source}"))]
    Evaluation { source: EvaluationError },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // --lex: we should only lex, and dump the tokens
    // --parse: we should lex and parse
    // no option: we should lex, parse, and print the structure of the program
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), DriverError> {
    let source = read_source(args.input_path.as_deref())?;

    let tokens = lex(&source)?;

    if args.lex {
        for token in &tokens {
            println!("{:?} {}", token.kind, token.lexeme);
        }
        return Ok(());
    }

    let program = parse(&tokens)?;

    if args.parse {
        return Ok(());
    }

    println!("{}", print_structure(&program)?);
    Ok(())
}

fn read_source(input_path: Option<&str>) -> Result<String, DriverError> {
    match input_path {
        None | Some("-") => io::read_to_string(io::stdin()).context(ReadSnafu { path: "<stdin>" }),
        Some(path) => fs::read_to_string(path).context(ReadSnafu { path }),
    }
}

fn lex(source: &str) -> Result<Vec<Token>, DriverError> {
    lexer::lex(source).context(LexSnafu)
}

fn parse(tokens: &[Token]) -> Result<Program, DriverError> {
    parser::parse_tokens(tokens).context(ParseSnafu)
}

fn print_structure(program: &Program) -> Result<String, DriverError> {
    visitor::render(program).context(EvaluationSnafu)
}
