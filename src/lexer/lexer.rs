use std::rc::Rc;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Pull-based scanner over an immutable source buffer.
///
/// `position` points at the byte under examination (`ch`), `read_position`
/// at the one after it. A `ch` of 0 marks the end of input.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: u8,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = self.byte_at(self.read_position);
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        self.byte_at(self.read_position)
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\r' | b'\n') {
            self.read_char();
        }
    }

    /// Consumes a maximal run of bytes accepted by `accept` and returns it.
    fn read_while(&mut self, accept: fn(u8) -> bool) -> String {
        let start = self.position;
        while !self.at_eof() && accept(self.ch) {
            self.read_char();
        }
        self.source[start..self.position].to_string()
    }

    /// Emits a token for the single byte under the cursor and steps past it.
    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        let literal = (self.ch as char).to_string();
        self.read_char();
        MK_TOKEN!(kind, literal, MK_SPAN!(start, self.position, self.file))
    }

    /// Emits a two-byte token whose second byte was already seen through `peek_char`.
    fn double(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.read_char();
        self.read_char();
        let literal = self.source[start..self.position].to_string();
        MK_TOKEN!(kind, literal, MK_SPAN!(start, self.position, self.file))
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            let end = self.source.len();
            return MK_TOKEN!(TokenKind::EndOfInput, String::new(), MK_SPAN!(end, end, self.file));
        }

        let token = match self.ch {
            b';' => self.single(TokenKind::Semicolon),
            b',' => self.single(TokenKind::Comma),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'=' => self.single(TokenKind::Equal),
            b':' => match self.peek_char() {
                b'=' => self.double(TokenKind::Assign),
                _ => self.single(TokenKind::Colon),
            },
            b'<' => match self.peek_char() {
                b'=' => self.double(TokenKind::LessOrEqual),
                b'>' => self.double(TokenKind::NotEqual),
                _ => self.single(TokenKind::LessThan),
            },
            b'>' => match self.peek_char() {
                b'=' => self.double(TokenKind::GreaterOrEqual),
                _ => self.single(TokenKind::GreaterThan),
            },
            ch if is_letter(ch) => {
                let start = self.position;
                let literal = self.read_while(is_letter);
                MK_TOKEN!(lookup_ident(&literal), literal, MK_SPAN!(start, self.position, self.file))
            }
            ch if ch.is_ascii_digit() => {
                let start = self.position;
                let literal = self.read_while(is_number_char);
                MK_TOKEN!(TokenKind::IntegerLiteral, literal, MK_SPAN!(start, self.position, self.file))
            }
            _ => self.illegal(),
        };

        log::trace!("lexed {} at {}", token, token.span.start.0);
        token
    }

    /// Emits the offending character as an `Illegal` token. A multi-byte
    /// UTF-8 character is taken whole so the cursor stays on a char boundary.
    fn illegal(&mut self) -> Token {
        let start = self.position;
        let width = self.source[start..].chars().next().map_or(1, char::len_utf8);
        for _ in 0..width {
            self.read_char();
        }
        let literal = self.source[start..self.position].to_string();
        MK_TOKEN!(TokenKind::Illegal, literal, MK_SPAN!(start, self.position, self.file))
    }
}

/// Yields tokens up to and including the first `EndOfInput`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        self.finished = token.is(TokenKind::EndOfInput);
        Some(token)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic()
}

// Digits plus the hex digits and radix suffixes of based literals (`5ABH`, `1343456B`).
fn is_number_char(ch: u8) -> bool {
    ch.is_ascii_digit() || matches!(ch.to_ascii_uppercase(), b'A'..=b'F' | b'H')
}

/// Scans the whole source, returning every token including the trailing `EndOfInput`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
