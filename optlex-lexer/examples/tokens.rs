use core::panic;

use optlex_lexer::{Lexer, Token};

struct MyArgs {
    level: String,
    quiet: bool,
    inputs: Vec<String>,
    passthrough: Vec<String>,
}

fn main() {
    let argv = ["-ql3", "in.txt", "--exec", "gzip", "-9"];

    let mut lexer = Lexer::from_args(argv);
    let mut args = MyArgs {
        level: String::new(),
        quiet: false,
        inputs: Vec::new(),
        passthrough: Vec::new(),
    };

    while lexer.advance() {
        match lexer.current().clone() {
            Token::Short('q') => args.quiet = true,
            Token::Short('l') => {
                args.level = lexer.value().expect("must have a level").into_text();
            }
            Token::Long(name) if name == "exec" => {
                args.passthrough = lexer
                    .raw_args()
                    .expect("must not have a pending value")
                    .collect_strings();
            }
            Token::Positional(input) => args.inputs.push(input),
            other => panic!("unexpected argument {other}"),
        }
    }

    if let Some(err) = lexer.error() {
        panic!("invalid command line: {err}");
    }

    if !args.quiet || args.level != "3" {
        panic!("invalid short options");
    }

    if args.inputs != ["in.txt"] || args.passthrough != ["gzip", "-9"] {
        panic!("invalid positionals");
    }
}
