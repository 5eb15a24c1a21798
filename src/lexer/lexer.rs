use log::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, MK_ERROR, MK_TOKEN};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// Scanner state for a single source text.
///
/// `start` and `pos` are byte offsets into `source`; the current lexeme is
/// always `source[start..pos]`.
pub(crate) struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: String,
    start: usize,
    pos: usize,
    start_line: u32,
    line: u32,
}

impl Lexer {
    fn new(source: String) -> Lexer {
        Lexer {
            tokens: vec![],
            errors: vec![],
            source,
            start: 0,
            pos: 0,
            start_line: 1,
            line: 1,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.at()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    /// Consumes the next character only if it is `expected`.
    fn match_next(&mut self, expected: char) -> bool {
        if self.at() == Some(expected) {
            self.pos += expected.len_utf8();
            return true;
        }

        false
    }

    fn lexeme(&self) -> &str {
        &self.source[self.start..self.pos]
    }

    fn push(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = MK_TOKEN!(kind, self.lexeme().to_string(), literal, self.start_line);
        trace!("{}", token);
        self.tokens.push(token);
    }

    fn error(&mut self, error_impl: ErrorImpl) {
        let error = MK_ERROR!(error_impl, self.line);
        trace!("{}", error);
        self.errors.push(error);
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn scan_token(lexer: &mut Lexer) {
    let c = match lexer.advance() {
        Some(c) => c,
        None => return,
    };

    match c {
        '(' => lexer.push(TokenKind::OpenParen, None),
        ')' => lexer.push(TokenKind::CloseParen, None),
        '{' => lexer.push(TokenKind::OpenCurly, None),
        '}' => lexer.push(TokenKind::CloseCurly, None),
        ',' => lexer.push(TokenKind::Comma, None),
        '.' => lexer.push(TokenKind::Dot, None),
        '-' => lexer.push(TokenKind::Dash, None),
        '+' => lexer.push(TokenKind::Plus, None),
        ';' => lexer.push(TokenKind::Semicolon, None),
        '*' => lexer.push(TokenKind::Star, None),

        '!' => {
            let kind = if lexer.match_next('=') { TokenKind::NotEquals } else { TokenKind::Not };
            lexer.push(kind, None);
        }
        '=' => {
            let kind = if lexer.match_next('=') { TokenKind::Equals } else { TokenKind::Assignment };
            lexer.push(kind, None);
        }
        '<' => {
            let kind = if lexer.match_next('=') { TokenKind::LessEquals } else { TokenKind::Less };
            lexer.push(kind, None);
        }
        '>' => {
            let kind = if lexer.match_next('=') { TokenKind::GreaterEquals } else { TokenKind::Greater };
            lexer.push(kind, None);
        }

        '/' => {
            if lexer.match_next('/') {
                comment_handler(lexer);
            } else {
                lexer.push(TokenKind::Slash, None);
            }
        }

        ' ' | '\r' | '\t' => {}
        '\n' => lexer.line += 1,

        '"' => string_handler(lexer),
        c if c.is_ascii_digit() => number_handler(lexer),
        c if c.is_alphabetic() => symbol_handler(lexer),

        character => lexer.error(ErrorImpl::UnexpectedCharacter { character }),
    }
}

// The newline ending the comment is left for scan_token so the line count stays in one place.
fn comment_handler(lexer: &mut Lexer) {
    while let Some(c) = lexer.at() {
        if c == '\n' {
            break;
        }
        lexer.advance();
    }
}

fn string_handler(lexer: &mut Lexer) {
    while let Some(c) = lexer.at() {
        if c == '"' {
            break;
        }
        if c == '\n' {
            lexer.line += 1;
        }
        lexer.advance();
    }

    if lexer.at_eof() {
        lexer.error(ErrorImpl::UnterminatedString);
        return;
    }

    // Closing quote
    lexer.advance();

    // Omit surrounding quotes
    let value = lexer.source[(lexer.start + 1)..(lexer.pos - 1)].to_string();
    lexer.push(TokenKind::String, Some(Literal::String(value)));
}

fn number_handler(lexer: &mut Lexer) {
    while matches!(lexer.at(), Some(d) if d.is_ascii_digit()) {
        lexer.advance();
    }

    // A '.' without a digit after it is not part of the number, e.g. `1.method`
    if lexer.at() == Some('.') && matches!(lexer.peek_next(), Some(d) if d.is_ascii_digit()) {
        lexer.advance();
        while matches!(lexer.at(), Some(d) if d.is_ascii_digit()) {
            lexer.advance();
        }
    }

    match lexer.lexeme().parse::<f64>() {
        Ok(value) => lexer.push(TokenKind::Number, Some(Literal::Number(value))),
        // Unreachable for digits with an optional fraction; huge literals parse to inf
        Err(_) => {
            let token = lexer.lexeme().to_string();
            lexer.error(ErrorImpl::NumberParseError { token });
        }
    }
}

fn symbol_handler(lexer: &mut Lexer) {
    // ASCII digits only, matching number_handler
    while matches!(lexer.at(), Some(c) if c.is_alphabetic() || c.is_ascii_digit()) {
        lexer.advance();
    }

    let kind = match RESERVED_LOOKUP.get(lexer.lexeme()) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    };
    lexer.push(kind, None);
}

/// Scans `source` into tokens, always terminated by a single EOF token.
///
/// Lexical errors never stop the scan; they are collected and returned
/// alongside the tokens. A scan succeeded if the returned errors are empty.
pub fn tokenize(source: String) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source);
    debug!("Scanning {} bytes", lex.source.len());

    while !lex.at_eof() {
        lex.start = lex.pos;
        lex.start_line = lex.line;
        scan_token(&mut lex);
    }

    let line = lex.line;
    lex.tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, line));

    debug!("Scanned {} tokens with {} errors", lex.tokens.len(), lex.errors.len());
    (lex.tokens, lex.errors)
}
