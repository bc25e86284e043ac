//! Decoding of integer lexemes.
//!
//! The lexer delimits number lexemes without interpreting them. A trailing
//! letter selects the radix:
//!
//! - `H` hexadecimal (`5ABH`)
//! - `B` or `C` octal (`17B`)
//! - `D` or no suffix decimal (`42D`, `42`)
//!
//! Suffixes are case-insensitive.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BASED_LITERAL: Regex =
        Regex::new(r"^(?P<digits>[0-9A-Fa-f]+?)(?P<suffix>[HhBbCcDd])?$").unwrap();
}

/// Returns the radix a suffix letter selects.
fn radix_of(suffix: Option<char>) -> u32 {
    match suffix.map(|c| c.to_ascii_uppercase()) {
        Some('H') => 16,
        Some('B') | Some('C') => 8,
        _ => 10,
    }
}

/// Decodes a number lexeme into its value, or `None` when the digits do not
/// fit the radix or the value overflows an i64.
pub fn decode_integer(lexeme: &str) -> Option<i64> {
    let captures = BASED_LITERAL.captures(lexeme)?;
    let digits = captures.name("digits")?.as_str();
    let suffix = captures
        .name("suffix")
        .and_then(|suffix| suffix.as_str().chars().next());

    i64::from_str_radix(digits, radix_of(suffix)).ok()
}

#[cfg(test)]
mod tests {
    use super::decode_integer;

    #[test]
    fn test_decimal() {
        assert_eq!(decode_integer("0"), Some(0));
        assert_eq!(decode_integer("42"), Some(42));
        assert_eq!(decode_integer("42D"), Some(42));
        assert_eq!(decode_integer("42d"), Some(42));
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(decode_integer("5ABH"), Some(0x5AB));
        assert_eq!(decode_integer("0ffh"), Some(255));
        assert_eq!(decode_integer("1343456H"), Some(0x1343456));
    }

    #[test]
    fn test_octal() {
        assert_eq!(decode_integer("17B"), Some(15));
        assert_eq!(decode_integer("1343456b"), Some(0o1343456));
        assert_eq!(decode_integer("1343456C"), Some(0o1343456));
    }

    #[test]
    fn test_invalid_digits() {
        // Hex digits without an H suffix
        assert_eq!(decode_integer("12A"), None);
        assert_eq!(decode_integer("1ABD"), None);
        // 8 is not an octal digit
        assert_eq!(decode_integer("18B"), None);
        assert_eq!(decode_integer(""), None);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(decode_integer("9223372036854775807"), Some(i64::MAX));
        assert_eq!(decode_integer("9223372036854775808"), None);
        assert_eq!(decode_integer("FFFFFFFFFFFFFFFFFH"), None);
    }
}
