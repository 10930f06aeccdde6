//! Message tokens and the built-in validation keys.

use std::fmt;

/// Template text for a validation message, optionally tied to a localization key.
///
/// The text may contain `{name}` placeholders which are filled from the
/// message's template context when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub key: String,
    pub text: String,
}

impl Token {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }

    /// A token with no localization key.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new("", text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

/// Built-in tokens, one per built-in rule, with their default text.
pub struct ValidationKeys;

impl ValidationKeys {
    pub const REQUIRED: &'static str = "required";
    pub const EMAIL: &'static str = "email";
    pub const DATE: &'static str = "date";
    pub const NUMBER: &'static str = "number";
    pub const MIN_LENGTH: &'static str = "minlength";
    pub const MAX_LENGTH: &'static str = "maxlength";
    pub const RANGE_LENGTH: &'static str = "rangelength";
    pub const MIN: &'static str = "min";
    pub const MAX: &'static str = "max";
    pub const REGEX: &'static str = "regex";
    pub const FIELD_EQUALITY: &'static str = "fieldequality";
    pub const REMOTE: &'static str = "remote";

    /// Default token for a key, `None` for keys this crate does not define.
    pub fn default_for(key: &str) -> Option<Token> {
        let text = match key {
            Self::REQUIRED => "Required Field",
            Self::EMAIL => "Invalid email address",
            Self::DATE => "Invalid date",
            Self::NUMBER => "Invalid number",
            Self::MIN_LENGTH => "Please enter at least {length} characters",
            Self::MAX_LENGTH => "Please enter no more than {length} characters",
            Self::RANGE_LENGTH => "Please enter a value between {min} and {max} characters long",
            Self::MIN => "Please enter a value greater than or equal to {bounds}",
            Self::MAX => "Please enter a value less than or equal to {bounds}",
            Self::REGEX => "Invalid format",
            Self::FIELD_EQUALITY => "{field1} must equal {field2}",
            Self::REMOTE => "Invalid value",
            _ => return None,
        };
        Some(Token::new(key, text))
    }

    /// Default token for a key, or a literal of the key itself when unknown.
    pub fn token(key: &str) -> Token {
        Self::default_for(key).unwrap_or_else(|| Token::literal(key))
    }
}
