//! A tiny `cat` that shows a typical lexing loop over the process arguments.
//!
//! Try `RUST_LOG=trace cargo run --example cat -- -n --tab=4 Cargo.toml`.

use std::fs;
use std::process::ExitCode;

use log::{debug, error};
use optlex::{Lexer, Token, TokenExt};

#[derive(Debug, Default)]
struct Args {
    number: bool,
    tab: Option<usize>,
    files: Vec<String>,
}

fn parse_args() -> Result<Args, optlex::Error> {
    let mut lexer = Lexer::from_env();
    let mut args = Args::default();

    while let Some(token) = lexer.next_token()? {
        match token {
            Token::Short('n') => args.number = true,
            Token::Long(name) if name == "number" => args.number = true,
            Token::Short('t') => args.tab = Some(lexer.value()?.to_uint()?),
            Token::Long(name) if name == "tab" => args.tab = Some(lexer.value()?.to_uint()?),
            Token::Short('h') => {
                println!("usage: cat [-n] [-t WIDTH] FILE...");
                std::process::exit(0);
            }
            Token::Positional(file) => {
                args.files.push(file);
                // The first positional ends the options.
                args.files.extend(lexer.raw_args()?.collect_strings());
            }
            other => {
                error!("unexpected argument {other}");
                std::process::exit(2);
            }
        }
    }

    Ok(args)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            error!("{err}");
            return ExitCode::from(2);
        }
    };

    debug!("{args:?}");

    let mut line_no = 0;
    for file in &args.files {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                error!("{file}: {err}");
                return ExitCode::FAILURE;
            }
        };

        for line in content.lines() {
            let line = match args.tab {
                Some(width) => line.replace('\t', &" ".repeat(width)),
                None => line.to_string(),
            };

            if args.number {
                line_no += 1;
                println!("{line_no:6}\t{line}");
            } else {
                println!("{line}");
            }
        }
    }

    ExitCode::SUCCESS
}
