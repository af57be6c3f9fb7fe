use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Characters that may separate the first name from the rest.
pub const SEPARATORS: [char; 2] = [' ', '\u{3000}'];

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("氏名は少なくとも1つの空白を含む必要があります")]
    MissingSeparator,
}

#[derive(Debug, Clone)]
pub struct FullName(String);

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FullName {
    pub fn parse(full_name: impl Into<String>) -> Result<Self, ParseError> {
        lazy_static! {
            static ref REGEX: Regex = {
                // At least one character on each side of an ASCII or
                // ideographic (U+3000) space
                Regex::new("^.+[ \u{3000}].+$").expect("Failed to compile regex")
            };
        }

        let full_name = full_name.into();

        if !REGEX.is_match(&full_name) {
            return Err(ParseError::MissingSeparator);
        }

        Ok(Self(full_name))
    }
}
