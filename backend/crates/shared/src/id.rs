//! Common ID Types
//!
//! Two families of identifiers cross context boundaries:
//! - [`Id<T>`]: UUID based (users, profiles, communities)
//! - [`DocumentId<T>`]: 12-byte object ids rendered as 24 hex chars
//!   (subscriptions, posts, reactions)
//!
//! Both validate their format at construction.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::app_error::{AppError, AppResult};

/// Generic typed UUID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id: UserId = Id::new();
/// assert_eq!(UserId::parse_str(&id.to_string()).unwrap(), id);
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Parse and validate a textual UUID
    pub fn parse_str(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::bad_request("Identifier cannot be empty"));
        }
        Ok(Self::from_uuid(Uuid::parse_str(trimmed)?))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

const DOCUMENT_ID_LEN: usize = 12;

static DOCUMENT_ID_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Typed 12-byte object id
///
/// Layout: 4-byte big-endian unix seconds, 5 random bytes, 3-byte counter.
/// Ids generated later sort after earlier ones at second granularity.
pub struct DocumentId<T> {
    bytes: [u8; DOCUMENT_ID_LEN],
    _marker: PhantomData<T>,
}

impl<T> DocumentId<T> {
    pub fn new() -> Self {
        let secs = chrono::Utc::now().timestamp().clamp(0, i64::from(u32::MAX)) as u32;
        let random: [u8; 5] = rand::random();
        let count = DOCUMENT_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);

        let mut bytes = [0u8; DOCUMENT_ID_LEN];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&random);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: [u8; DOCUMENT_ID_LEN]) -> Self {
        Self {
            bytes,
            _marker: PhantomData,
        }
    }

    /// Parse a 24-character hex string
    pub fn parse_str(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.len() != DOCUMENT_ID_LEN * 2 {
            return Err(AppError::bad_request("Object id must be 24 hex characters")
                .with_details(trimmed.to_string()));
        }
        let mut bytes = [0u8; DOCUMENT_ID_LEN];
        hex::decode_to_slice(trimmed, &mut bytes)?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; DOCUMENT_ID_LEN] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl<T> Clone for DocumentId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DocumentId<T> {}

impl<T> PartialEq for DocumentId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<T> Eq for DocumentId<T> {}

impl<T> PartialOrd for DocumentId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for DocumentId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl<T> Hash for DocumentId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl<T> Default for DocumentId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DocumentId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.to_hex())
    }
}

impl<T> fmt::Display for DocumentId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<T> FromStr for DocumentId<T> {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl<T> Serialize for DocumentId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, T> Deserialize<'de> for DocumentId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_str(&raw).map_err(|e| serde::de::Error::custom(e.message().to_string()))
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct User;
    pub struct Profile;
    pub struct Community;
    pub struct Subscription;
    pub struct Post;
    pub struct Reaction;
}

pub type UserId = Id<markers::User>;
pub type ProfileId = Id<markers::Profile>;
pub type CommunityId = Id<markers::Community>;
pub type SubscriptionId = DocumentId<markers::Subscription>;
pub type PostId = DocumentId<markers::Post>;
pub type ReactionId = DocumentId<markers::Reaction>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: CommunityId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_id_rejects_malformed_input() {
        assert_eq!(
            UserId::parse_str("").unwrap_err().kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            UserId::parse_str("not-a-uuid").unwrap_err().kind(),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn test_id_parse_trims_whitespace() {
        let id: ProfileId = Id::new();
        let parsed = ProfileId::parse_str(&format!("  {}  ", id)).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_document_id_hex_shape() {
        let id = PostId::new();
        let hex = id.to_string();
        assert_eq!(hex.len(), 24);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(PostId::parse_str(&hex).unwrap(), id);
    }

    #[test]
    fn test_document_id_rejects_bad_input() {
        assert!(SubscriptionId::parse_str("abc").is_err());
        assert!(SubscriptionId::parse_str("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }

    #[test]
    fn test_document_ids_are_unique() {
        let a = ReactionId::new();
        let b = ReactionId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_document_id_serde_as_hex_string() {
        let id = PostId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: PostId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
