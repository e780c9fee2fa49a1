//! Application Configuration

use std::fmt;
use std::str::FromStr;

/// Which identity a new community records as its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnerIdentity {
    #[default]
    User,
    Profile,
}

impl FromStr for OwnerIdentity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(OwnerIdentity::User),
            "profile" => Ok(OwnerIdentity::Profile),
            other => Err(format!("unknown owner identity: {other}")),
        }
    }
}

impl fmt::Display for OwnerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerIdentity::User => f.write_str("user"),
            OwnerIdentity::Profile => f.write_str("profile"),
        }
    }
}

/// Communities application configuration
#[derive(Debug, Clone)]
pub struct CommunitiesConfig {
    /// Identity recorded as owner on create
    pub owner_identity: OwnerIdentity,
    /// Page size used when scanning all communities
    pub reconcile_batch_size: u32,
}

impl Default for CommunitiesConfig {
    fn default() -> Self {
        Self {
            owner_identity: OwnerIdentity::User,
            reconcile_batch_size: 100,
        }
    }
}

impl CommunitiesConfig {
    /// Create config for development (small batches)
    pub fn development() -> Self {
        Self {
            reconcile_batch_size: 10,
            ..Default::default()
        }
    }

    pub fn with_owner_identity(mut self, owner_identity: OwnerIdentity) -> Self {
        self.owner_identity = owner_identity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_identity_parsing() {
        assert_eq!("user".parse::<OwnerIdentity>().unwrap(), OwnerIdentity::User);
        assert_eq!(" Profile ".parse::<OwnerIdentity>().unwrap(), OwnerIdentity::Profile);
        assert!("email".parse::<OwnerIdentity>().is_err());
    }
}
