//! The `lex` debug command: show the token stream of a file.

use std::fmt::Write;

use desrever_ir::TokenList;

use super::{read_file, report_and_exit};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    match desrever_lexer::lex(&content) {
        Ok(tokens) => print!("{}", format_tokens(path, &tokens)),
        Err(error) => report_and_exit(path, &content, &error.into()),
    }
}

pub fn format_tokens(path: &str, tokens: &TokenList) -> String {
    let mut out = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
    for token in tokens {
        let _ = writeln!(out, "  {token:?}");
    }
    out
}
