//! The `run` command.

use std::fmt::Write;

use desrever_eval::{run_source, stdout_handler, Environment};

use super::{read_file, report_and_exit};

/// Options accepted by `desrever run`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print the final variable table to stderr after a successful run.
    pub dump_env: bool,
}

/// Run a program, printing its output to stdout.
pub fn run_file(path: &str, options: RunOptions) {
    let source = read_file(path);
    tracing::debug!(path, bytes = source.len(), "running file");

    match run_source(&source, stdout_handler()) {
        Ok(env) => {
            if options.dump_env {
                eprint!("{}", format_env(&env));
            }
        }
        Err(error) => report_and_exit(path, &source, &error),
    }
}

/// Render the variable table, one `name = value (type)` line per binding.
pub fn format_env(env: &Environment) -> String {
    let mut out = format!("Variables ({}):\n", env.len());
    for (name, value) in env.sorted_bindings() {
        let _ = writeln!(out, "  {name} = {value} ({})", value.type_name());
    }
    out
}
