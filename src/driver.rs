//! Script execution orchestration for the `monkey run` command.

use std::fs;
use std::io;

use monkey::eval::{RuntimeError, eval_program};
use monkey::lexer::Lexer;
use monkey::object::{Environment, Object};
use monkey::parser::{ParseError, Parser};

use crate::diagnostics;

/// Everything that can go wrong while running a script file.
#[derive(Debug)]
pub(crate) enum RunError {
    /// The file could not be read.
    Read {
        /// The path as given on the command line.
        path: String,
        /// The underlying I/O error.
        error: io::Error,
    },
    /// The file did not parse; the source is kept for diagnostics.
    Parse {
        /// The path as given on the command line.
        path: String,
        /// The full source text, for rendering labeled reports.
        source: String,
        /// The accumulated parse errors.
        errors: Vec<ParseError>,
    },
    /// Evaluation produced a runtime error.
    Runtime(RuntimeError),
}

/// Runs a script file to completion.
///
/// The file is read, parsed, and evaluated in a fresh environment. When
/// the program's final value is non-null, its Inspect form is printed to
/// stdout. Parse errors skip evaluation entirely.
pub(crate) fn run_file(path: &str) -> Result<(), RunError> {
    let source = fs::read_to_string(path).map_err(|error| RunError::Read {
        path: path.to_string(),
        error,
    })?;

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();
    let errors = parser.errors().to_vec();
    if !errors.is_empty() {
        return Err(RunError::Parse {
            path: path.to_string(),
            source,
            errors,
        });
    }

    let env = Environment::new_shared();
    match eval_program(&program, &env) {
        Ok(Object::Null) => Ok(()),
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(error) => Err(RunError::Runtime(error)),
    }
}

/// Reports a [`RunError`] on stderr.
pub(crate) fn report(error: &RunError) {
    match error {
        RunError::Read { path, error } => {
            eprintln!("Error: could not read '{}': {}", path, error);
        }
        RunError::Parse {
            path,
            source,
            errors,
        } => {
            diagnostics::report_parse_errors(path, source, errors);
        }
        RunError::Runtime(error) => {
            eprintln!("ERROR: {}", error);
        }
    }
}
