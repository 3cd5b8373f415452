//! Desrever command-line driver.
//!
//! Reads source files, runs them through `desrever_eval`, and renders
//! failures as source diagnostics. The binary in `main.rs` only parses
//! arguments and dispatches to [`commands`].

pub mod commands;
pub mod reporting;
pub mod tracing_setup;
