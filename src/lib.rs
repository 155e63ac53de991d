#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A half-open `[start, end)` byte range into the source, plus the text it covers.
///
/// A span whose `end` is zero is synthetic (the end-of-input token uses one) and
/// always reports empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl TextSpan {
    pub fn new(start: usize, end: usize, source: &str) -> Self {
        let text = if end == 0 {
            String::new()
        } else {
            source.get(start..end).unwrap_or_default().to_string()
        };

        TextSpan { start, end, text }
    }

    pub fn null() -> Self {
        TextSpan::default()
    }

    pub fn is_synthetic(&self) -> bool {
        self.end == 0
    }
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line's text and the offset of
/// `position` within that line. Offsets past the end clamp to the end of the
/// last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // `pos` is the very end of the source
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line.to_string(), line.len()),
        _ => (line_number, String::new(), 0),
    }
}

/// Renders an error the way the driver reports it:
///
/// ```text
/// Error: ExpectedSemicolon (expected `;`, found end of input)
/// -> main.jsam
///    |
///  1 | int x = 5
///    | ---------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let span = error.get_span();
    let position = if span.is_synthetic() {
        source.trim_end_matches([' ', '\n']).len()
    } else {
        span.start
    };

    let (line, line_text, line_pos) = get_line_at_position(source, position);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // columns are characters, `line_pos` is a byte offset
    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |before| before.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nint x = 5;\n\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 34);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = get_line_at_position("int x\nint y", 11);
        assert_eq!(line_number, 2);
        assert_eq!(line, "int y");
        assert_eq!(line_pos, 5);
    }

    #[test]
    fn test_text_span_synthetic_is_empty() {
        let span = TextSpan::new(4, 0, "abcdef");
        assert!(span.is_synthetic());
        assert_eq!(span.text, "");

        let span = TextSpan::new(1, 3, "abcdef");
        assert_eq!(span.text, "bc");
    }
}
