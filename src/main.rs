//! The Monkey interpreter CLI.
//!
//! This binary provides `monkey run` and `monkey repl` commands and
//! delegates script execution to the driver module. Running with no
//! subcommand starts the REPL.

use clap::{Parser, Subcommand};

mod diagnostics;
mod driver;
mod repl;

/// Command-line interface for the Monkey interpreter.
#[derive(Parser)]
#[command(name = "monkey")]
#[command(about = "The Monkey programming language", long_about = None)]
struct Cli {
    /// The subcommand to execute. Defaults to the REPL.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run a Monkey script file.
    Run {
        /// The source file to run (e.g., `fib.monkey`).
        file: String,
    },
    /// Start an interactive session.
    Repl,
}

/// Entry point for the Monkey interpreter.
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { file }) => {
            if let Err(error) = driver::run_file(&file) {
                driver::report(&error);
                std::process::exit(1);
            }
        }
        Some(Commands::Repl) | None => {
            if let Err(error) = repl::start() {
                eprintln!("Error: {}", error);
                std::process::exit(1);
            }
        }
    }
}
