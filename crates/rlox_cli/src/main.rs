//! rlox: The Lox front-end driver.
//!
//! Usage:
//!   rlox [FILE]
//!
//! With a file argument, tokenizes the file, prints the token stream and any
//! diagnostics, and exits non-zero when lexical errors were reported. With
//! no argument, runs a line-at-a-time prompt.

use clap::Parser;
use rlox_scanner::Scanner;
use std::io::{self, BufRead, Write};
use std::process;

/// Exit code for ill-formed input, matching sysexits EX_DATAERR.
const EXIT_DATA_ERR: i32 = 65;

#[derive(Parser, Debug)]
#[command(name = "rlox", about = "Tokenize Lox source code")]
struct Cli {
    /// Lox script to tokenize. Reads from a prompt when omitted.
    #[arg(value_name = "FILE")]
    file: Option<String>,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.file {
        Some(ref file) => run_file(file),
        None => run_prompt(),
    };
    process::exit(exit_code);
}

fn run_file(file: &str) -> i32 {
    let source = match std::fs::read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            print_error(&format!("failed to read '{}': {}", file, e));
            return 1;
        }
    };

    let had_errors = run(&source, Some(file));
    if had_errors {
        EXIT_DATA_ERR
    } else {
        0
    }
}

fn run_prompt() -> i32 {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {
                // Errors in one line must not poison the next one.
                run(&line, None);
            }
            Err(e) => {
                print_error(&format!("failed to read input: {}", e));
                return 1;
            }
        }
    }

    0
}

/// Scan one source text, print its tokens and diagnostics. Returns whether
/// any lexical error was reported.
fn run(source: &str, file: Option<&str>) -> bool {
    let result = Scanner::new(source).scan_tokens();

    for token in &result.tokens {
        println!("{}", token);
    }

    let use_color = stderr_is_terminal();
    for diag in result.diagnostics.diagnostics() {
        print_diagnostic(diag, file, use_color);
    }

    if result.diagnostics.has_errors() {
        let count = result.diagnostics.error_count();
        eprintln!("\nFound {} error{}.", count, if count == 1 { "" } else { "s" });
        true
    } else {
        false
    }
}

fn print_diagnostic(diag: &rlox_diagnostics::Diagnostic, file: Option<&str>, use_color: bool) {
    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        let category = if diag.is_error() { "error" } else { "warning" };
        if let Some(file) = file {
            eprint!("{}{}{}: ", CYAN, file, RESET);
        }
        eprintln!(
            "[line {}] {}{}{}{} {}{}{}: {}",
            diag.line,
            BOLD, color, category, RESET,
            CYAN, format!("LX{}", diag.code), RESET,
            diag.message_text
        );
    } else {
        match file {
            Some(file) => eprintln!("{}: {}", file, diag),
            None => eprintln!("{}", diag),
        }
    }
}

fn print_error(msg: &str) {
    if stderr_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn stderr_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
