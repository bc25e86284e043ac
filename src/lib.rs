#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source, with the source's name.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte `position` of `content`.
///
/// Returns the 1-based line number, the line text and the offset of the
/// position within that line. A position at the very end of the content
/// belongs to the last line; anything past it yields `None`.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: past the trailing newline, or an empty source
    if content.ends_with('\n') || content.is_empty() {
        Some((line_number, String::new(), 0))
    } else {
        let last = content.rsplit('\n').next().unwrap_or("");
        Some((line_number - 1, last.to_string(), last.len()))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    const SOURCE: &str = "Hello, world!\nThis is a test file.\n\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 44).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        assert_eq!(
            super::get_line_at_position("a := ", 5),
            Some((1, "a := ".to_string(), 5))
        );
        assert_eq!(
            super::get_line_at_position("a\n", 2),
            Some((2, String::new(), 0))
        );
        assert_eq!(super::get_line_at_position("", 0), Some((1, String::new(), 0)));
        assert_eq!(super::get_line_at_position("abc", 4), None);
    }

    #[test]
    fn test_format_error() {
        let source = "x: integer;\n  y := );\n";
        let error = Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: TokenKind::RParen,
            },
            Position(19, Rc::new("prog.mp".to_string())),
        );

        let report = super::format_error(&error, source);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Error: no prefix parse function for RParen found");
        assert_eq!(lines[1], "-> prog.mp");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | y := );");
        assert_eq!(lines[4], "  | -----^");
    }
}

/// Renders an error as a report pointing at its source line.
///
/// ```text
/// Error: message (tip)
/// -> prog.mp
///   |
/// 2 | y := );
///   | -----^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();

    let mut report = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error)
    } else {
        format!("Error: {} ({})\n", error, error.get_tip())
    };
    report.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return report;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    report.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    report.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    report.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    report
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
