//! `lex` and `parse` command output.

mod dump;
mod lexer;
