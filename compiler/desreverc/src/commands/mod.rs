//! Command handlers for the Desrever CLI.
//!
//! Each submodule implements one command. `read_file` lives here in the
//! module root and is shared by both.

use std::io::IsTerminal;

use desrever_eval::Error;

use crate::reporting::render_error;

mod lex;
mod run;

pub use lex::{format_tokens, lex_file};
pub use run::{format_env, run_file, RunOptions};

/// Read a source file, exiting with a friendly message on failure.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Print a diagnostic for `error` to stderr and exit with status 1.
pub(super) fn report_and_exit(path: &str, source: &str, error: &Error) -> ! {
    let color = std::io::stderr().is_terminal();
    eprint!("{}", render_error(path, source, error, color));
    std::process::exit(1);
}
