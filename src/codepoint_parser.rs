use log::trace;
use pest::Parser;
use pest_derive::Parser;

use crate::errors::CodepointParseError;

#[derive(Parser)]
#[grammar = "codepoint_grammar.pest"]
pub struct CodepointParser;

/// Parses a list of hexadecimal code points, each optionally prefixed with `U+`, into characters.
pub fn parse_codepoints(input: &str) -> Result<Vec<char>, CodepointParseError> {
    let list = CodepointParser::parse(Rule::codepoint_list, input)?;

    let mut characters: Vec<char> = vec![];
    for codepoint in list.flat_map(|l| l.into_inner()) {
        if codepoint.as_rule() != Rule::codepoint {
            continue;
        }
        for part in codepoint.into_inner() {
            if part.as_rule() == Rule::hex_digits {
                let digits = part.as_str();
                let value = u32::from_str_radix(digits, 16)
                    .map_err(|error| CodepointParseError::InvalidHex{digits: digits.to_string(), error})?;
                match char::from_u32(value) {
                    None => return Err(CodepointParseError::InvalidCodepoint{codepoint: value}),
                    Some(c) => {
                        trace!("parsed {digits} as {c:?}");
                        characters.push(c)
                    }
                }
            }
        }
    }
    return Ok(characters);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_codepoint() {
        assert_eq!(parse_codepoints("0041").unwrap(), vec!['A']);
        assert_eq!(parse_codepoints("U+1F600").unwrap(), vec!['\u{1f600}']);
        assert_eq!(parse_codepoints("u+e9").unwrap(), vec!['\u{e9}']);
    }

    #[test]
    fn test_codepoint_list() {
        assert_eq!(parse_codepoints("U+0048 U+0069").unwrap(), vec!['H', 'i']);
        assert_eq!(parse_codepoints(" 65, 301\n").unwrap(), vec!['e', '\u{301}']);
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(parse_codepoints(""), Err(CodepointParseError::SyntaxError{..})));
        assert!(matches!(parse_codepoints("U+"), Err(CodepointParseError::SyntaxError{..})));
        assert!(matches!(parse_codepoints("U+ 41"), Err(CodepointParseError::SyntaxError{..})));
        assert!(matches!(parse_codepoints("hello"), Err(CodepointParseError::SyntaxError{..})));
    }

    #[test]
    fn test_codepoints_need_separators() {
        assert!(matches!(parse_codepoints("41U+42"), Err(CodepointParseError::SyntaxError{..})));
        assert!(matches!(parse_codepoints("U+41U+42"), Err(CodepointParseError::SyntaxError{..})));
        assert!(matches!(parse_codepoints("41 ,"), Err(CodepointParseError::SyntaxError{..})));
        assert_eq!(parse_codepoints("41 U+42").unwrap(), vec!['A', 'B']);
        assert_eq!(parse_codepoints("41,42").unwrap(), vec!['A', 'B']);
        assert_eq!(parse_codepoints("4142").unwrap(), vec!['\u{4142}']);
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            parse_codepoints("D800"),
            Err(CodepointParseError::InvalidCodepoint{codepoint: 0xD800})
        ));
        assert!(matches!(
            parse_codepoints("110000"),
            Err(CodepointParseError::InvalidCodepoint{codepoint: 0x110000})
        ));
        assert!(matches!(
            parse_codepoints("123456789"),
            Err(CodepointParseError::InvalidHex{..})
        ));
    }
}
