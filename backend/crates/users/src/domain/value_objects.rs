//! Domain Value Objects

use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use url::Url;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    Empty,
    TooShort { length: usize },
    TooLong { length: usize },
    InvalidCharacter { char: char, position: usize },
}

impl fmt::Display for UsernameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Username cannot be empty"),
            Self::TooShort { length } => write!(
                f,
                "Username is too short ({length} chars, minimum {USERNAME_MIN_LENGTH})"
            ),
            Self::TooLong { length } => write!(
                f,
                "Username is too long ({length} chars, maximum {USERNAME_MAX_LENGTH})"
            ),
            Self::InvalidCharacter { char, position } => write!(
                f,
                "Invalid character '{char}' at position {position}. Only a-z, A-Z, 0-9 and _ are allowed"
            ),
        }
    }
}

impl std::error::Error for UsernameError {}

/// Display handle of a user
///
/// NFKC normalized and trimmed, then restricted to `[a-zA-Z0-9_]{3,30}`.
/// Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(input: impl AsRef<str>) -> Result<Self, UsernameError> {
        let normalized = input.as_ref().nfkc().collect::<String>().trim().to_string();
        Self::validate(&normalized)?;
        Ok(Self(normalized))
    }

    fn validate(value: &str) -> Result<(), UsernameError> {
        if value.is_empty() {
            return Err(UsernameError::Empty);
        }
        let length = value.chars().count();
        if length < USERNAME_MIN_LENGTH {
            return Err(UsernameError::TooShort { length });
        }
        if length > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong { length });
        }
        if let Some((position, char)) = value
            .chars()
            .enumerate()
            .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(UsernameError::InvalidCharacter { char, position });
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Absolute http(s) URL pointing at a profile picture or banner
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub struct ExternalUrl(Url);

impl ExternalUrl {
    pub fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err("URL cannot be empty".to_string());
        }
        let url = Url::parse(trimmed).map_err(|e| format!("URL must be absolute: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("URL must use http or https, got {}", url.scheme()));
        }
        Ok(Self(url))
    }

    /// Parse an optional input, treating blank strings as absent
    pub fn parse_optional(input: Option<&str>) -> Result<Option<Self>, String> {
        match input.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Self::parse(raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
