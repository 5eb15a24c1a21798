//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts Lox source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Single-pass scanning with at most two characters of lookahead
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking for every token and diagnostic
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
