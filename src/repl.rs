//! The interactive read-eval-print loop.
//!
//! One top-level environment lives for the whole session, so `let`
//! bindings persist from one prompt to the next. Parse errors print a
//! banner and skip evaluation; runtime errors print as `ERROR: <message>`
//! and the session continues.

use std::io::{self, BufRead, Write};

use monkey::eval::eval_program;
use monkey::lexer::Lexer;
use monkey::object::{Environment, Object};
use monkey::parser::Parser;

const PROMPT: &str = ">> ";

const BANNER: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

/// Runs the REPL until `exit()` or end of input.
pub(crate) fn start() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    let env = Environment::new_shared();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let mut input = line?;

        if input.trim() == "exit()" {
            println!("Goodbye!");
            break;
        }

        // A line ending in `{` starts a multi-line form; keep reading
        // until a blank line closes it.
        if input.trim_end().ends_with('{') {
            for continuation in lines.by_ref() {
                let continuation = continuation?;
                if continuation.trim().is_empty() {
                    break;
                }
                input.push('\n');
                input.push_str(&continuation);
            }
        }

        let mut parser = Parser::new(Lexer::new(&input));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print!("{}", BANNER);
            println!("Woops! We ran into some monkey business here!");
            println!(" parser errors:");
            for error in parser.errors() {
                println!("\t{}", error.message);
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(Object::Null) => {}
            Ok(value) => println!("{}", value),
            Err(error) => println!("ERROR: {}", error),
        }
    }

    Ok(())
}
