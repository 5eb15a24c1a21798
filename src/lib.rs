#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Returns the text of the 1-based `line` of `source`, without its line ending.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source
        .split('\n')
        .nth(index)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        [line 2] Error: Unexpected character
        -> script.lox
          |
        2 | var a = @;
          = `@` does not start any token
    */

    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    let mut rendered = format!("{}\n", error);
    rendered.push_str(&format!("-> {}\n", file));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    match get_line(source, error.get_line()).map(str::trim_end) {
        Some("") => rendered.push_str(&format!("{} |\n", line_string)),
        Some(line_text) => rendered.push_str(&format!("{} | {}\n", line_string, line_text)),
        None => {}
    }

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        rendered.push_str(&format!("{:>padding$} {}\n", "=", tip));
    }

    rendered
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";
        assert_eq!(super::get_line(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line(source, 2), Some("second"));
        assert_eq!(super::get_line(source, 3), Some(""));
        assert_eq!(super::get_line(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line(source, 0), None);
        assert_eq!(super::get_line(source, 9), None);
    }

    #[test]
    fn test_render_error() {
        let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 2);
        let rendered = super::render_error(&error, "var a;\nvar b = @;\n", "script.lox");

        assert_eq!(
            rendered,
            "[line 2] Error: Unexpected character\n\
             -> script.lox\n  |\n\
             2 | var b = @;\n  \
             = `@` does not start any token\n"
        );
    }

    #[test]
    fn test_render_error_on_empty_line() {
        let error = Error::new(ErrorImpl::UnterminatedString, 2);
        let rendered = super::render_error(&error, "\"abc\n", "script.lox");

        assert_eq!(
            rendered,
            "[line 2] Error: Unterminated string\n-> script.lox\n  |\n2 |\n  \
             = Add a closing `\"` to end the string\n"
        );
    }

    #[test]
    fn test_render_error_without_tip() {
        let error = Error::new(ErrorImpl::NumberParseError { token: "1x".to_string() }, 1);
        let rendered = super::render_error(&error, "1x", "<prompt>");

        assert_eq!(
            rendered,
            "[line 1] Error: error parsing number: \"1x\"\n-> <prompt>\n  |\n1 | 1x\n"
        );
    }
}
