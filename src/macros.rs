//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates a lexical Error from an ErrorImpl variant and line

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The verbatim source text
/// * `$literal` - The decoded `Option<Literal>`
/// * `$line` - The source line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Some(Literal::Number(42.0)), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            line: $line,
        }
    };
}

/// Creates an Error at the given line.
///
/// ```ignore
/// let error = MK_ERROR!(ErrorImpl::UnterminatedString, 3);
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($error_impl:expr, $line:expr) => {
        Error::new($error_impl, $line)
    };
}
