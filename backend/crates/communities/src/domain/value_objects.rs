//! Domain Value Objects

use derive_more::Display;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use url::Url;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 100;
pub const DESCRIPTION_MIN_LENGTH: usize = 10;
pub const DESCRIPTION_MAX_LENGTH: usize = 500;

fn normalized(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_string()
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let length = value.chars().count();
    if length == 0 {
        return Err(format!("{field} cannot be empty"));
    }
    if length < min {
        return Err(format!("{field} must be at least {min} characters long"));
    }
    if length > max {
        return Err(format!("{field} cannot exceed {max} characters"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub struct CommunityName(String);

impl CommunityName {
    pub fn new(input: &str) -> Result<Self, String> {
        let value = normalized(input);
        check_length("Community name", &value, NAME_MIN_LENGTH, NAME_MAX_LENGTH)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub struct Description(String);

impl Description {
    pub fn new(input: &str) -> Result<Self, String> {
        let value = normalized(input);
        check_length(
            "Description",
            &value,
            DESCRIPTION_MIN_LENGTH,
            DESCRIPTION_MAX_LENGTH,
        )?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Icon or banner location, absolute http(s)
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub struct AssetUrl(Url);

impl AssetUrl {
    /// Blank input is treated as "no asset"
    pub fn parse_optional(input: Option<&str>) -> Result<Option<Self>, String> {
        let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let url = Url::parse(raw).map_err(|e| format!("Asset URL must be absolute: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err("Asset URL must use http or https".to_string());
        }
        Ok(Some(Self(url)))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed_and_bounded() {
        assert_eq!(CommunityName::new("  Rustaceans ").unwrap().as_str(), "Rustaceans");
        assert!(CommunityName::new("ab").is_err());
        assert!(CommunityName::new(&"x".repeat(101)).is_err());
        assert!(CommunityName::new(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn test_description_bounds() {
        assert!(Description::new("too short").is_err());
        assert!(Description::new("A place to talk about Rust.").is_ok());
        assert!(Description::new(&"d".repeat(501)).is_err());
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(AssetUrl::parse_optional(None).unwrap(), None);
        assert_eq!(AssetUrl::parse_optional(Some("")).unwrap(), None);
        assert!(AssetUrl::parse_optional(Some("https://cdn.example.com/i.png"))
            .unwrap()
            .is_some());
        assert!(AssetUrl::parse_optional(Some("data:image/png;base64,AAAA")).is_err());
    }
}
