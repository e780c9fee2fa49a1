//! Domain Value Objects

use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use url::Url;

pub const CONTENT_MAX_LENGTH: usize = 5000;
pub const IMAGES_MAX_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    #[default]
    Message,
    Announcement,
}

impl PostKind {
    pub const fn code(&self) -> &'static str {
        match self {
            PostKind::Message => "message",
            PostKind::Announcement => "announcement",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_lowercase().as_str() {
            "message" => Ok(PostKind::Message),
            "announcement" => Ok(PostKind::Announcement),
            other => Err(format!("Unknown post kind: {other}")),
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Post body. Inner line breaks are kept; only the ends are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(input: &str) -> Result<Self, String> {
        let value = input.nfkc().collect::<String>().trim().to_string();
        if value.is_empty() {
            return Err("Post content cannot be empty".to_string());
        }
        if value.chars().count() > CONTENT_MAX_LENGTH {
            return Err(format!(
                "Post content cannot exceed {CONTENT_MAX_LENGTH} characters"
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Attached image locations, in submission order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostImages(Vec<Url>);

impl PostImages {
    /// Blank entries are skipped and repeats collapse to the first occurrence.
    pub fn new<S: AsRef<str>>(inputs: &[S]) -> Result<Self, String> {
        let mut urls: Vec<Url> = Vec::new();
        for raw in inputs.iter().map(|s| s.as_ref().trim()).filter(|s| !s.is_empty()) {
            let url = Url::parse(raw).map_err(|e| format!("Image URL must be absolute: {e}"))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err("Image URL must use http or https".to_string());
            }
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        if urls.len() > IMAGES_MAX_COUNT {
            return Err(format!("A post can carry at most {IMAGES_MAX_COUNT} images"));
        }
        Ok(Self(urls))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|url| url.as_str().to_string()).collect()
    }
}
