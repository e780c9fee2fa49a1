//! Community visibility

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a community accepts delegated subscriptions from its staff
/// (`Private`) or only self-subscriptions (`Public`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    Private,
}

impl Privacy {
    pub const fn from_private_flag(is_private: bool) -> Self {
        if is_private {
            Privacy::Private
        } else {
            Privacy::Public
        }
    }

    pub const fn is_private(&self) -> bool {
        matches!(self, Privacy::Private)
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Privacy::Public => "public",
            Privacy::Private => "private",
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_mapping() {
        assert_eq!(Privacy::from_private_flag(true), Privacy::Private);
        assert_eq!(Privacy::from_private_flag(false), Privacy::Public);
        assert!(Privacy::Private.is_private());
        assert!(!Privacy::default().is_private());
    }
}
