use std::fmt::Display;
use std::fmt::Formatter;
use std::path::PathBuf;

use crate::codepoint_parser::Rule;

#[derive(Debug)]
pub enum AliasTableError {
    IoError { path: PathBuf, error: std::io::Error },
    PatternError { error: regex::Error },
}

impl Display for AliasTableError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            AliasTableError::IoError{path, error} => write!(f, "I/O error while reading alias file \
                {}: {error}", path.display()),
            AliasTableError::PatternError{error} => write!(f, "Could not build alias record pattern: {error}"),
        }
    }
}

impl std::error::Error for AliasTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AliasTableError::IoError{error, ..} => Some(error),
            AliasTableError::PatternError{error} => Some(error),
        }
    }
}

impl From<regex::Error> for AliasTableError {
    fn from(error: regex::Error) -> Self {
        AliasTableError::PatternError{error}
    }
}

/// Raised when a caller hands over something other than exactly one character.
#[derive(Debug, PartialEq, Eq)]
pub enum InputError {
    Empty,
    NotSingleCharacter { count: usize },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            InputError::Empty => write!(f, "Expected a single character, but the input was empty."),
            InputError::NotSingleCharacter{count} => write!(f, "Expected a single character, \
                but the input contains {count} characters."),
        }
    }
}

impl std::error::Error for InputError {}

#[derive(Debug)]
pub enum CodepointParseError {
    SyntaxError { error: Box<pest::error::Error<Rule>> },
    InvalidHex { digits: String, error: std::num::ParseIntError },
    InvalidCodepoint { codepoint: u32 },
}

impl Display for CodepointParseError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            CodepointParseError::SyntaxError{error} => write!(f, "Error parsing code point list: \n{error}"),
            CodepointParseError::InvalidHex{digits, error} => write!(f, "'{digits}' is not a valid \
                hexadecimal code point: {error}"),
            CodepointParseError::InvalidCodepoint{codepoint} => write!(f, "U+{codepoint:04X} is not \
                a Unicode scalar value."),
        }
    }
}

impl std::error::Error for CodepointParseError {}

impl From<pest::error::Error<Rule>> for CodepointParseError {
    fn from(error: pest::error::Error<Rule>) -> Self {
        CodepointParseError::SyntaxError{error: Box::new(error)}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            InputError::Empty.to_string(),
            "Expected a single character, but the input was empty."
        );
        assert_eq!(
            InputError::NotSingleCharacter{count: 2}.to_string(),
            "Expected a single character, but the input contains 2 characters."
        );
    }

    #[test]
    fn test_invalid_codepoint_message() {
        let error = CodepointParseError::InvalidCodepoint{codepoint: 0xD800};
        assert_eq!(error.to_string(), "U+D800 is not a Unicode scalar value.");
    }
}
