//! Authorization decisions
//!
//! Each context names its gates as a rule enum implementing [`PolicyRule`].
//! Pure policy functions return a [`Decision`] carrying the rule that matched,
//! so the caller can log it and map a deny to its own forbidden error.

use std::fmt;

pub trait PolicyRule: Copy + fmt::Debug + Send + Sync + 'static {
    /// Stable snake_case identifier used in logs
    fn code(&self) -> &'static str;

    /// Human readable message; for deny rules this is the error message
    fn message(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<R> {
    Allow(R),
    Deny(R),
}

impl<R: PolicyRule> Decision<R> {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    pub fn rule(&self) -> R {
        match self {
            Decision::Allow(rule) | Decision::Deny(rule) => *rule,
        }
    }

    /// Emit the decision log record for this gate.
    pub fn record(
        self,
        gate: &'static str,
        subject: impl fmt::Display,
        resource: impl fmt::Display,
    ) -> Self {
        match &self {
            Decision::Allow(rule) => tracing::debug!(
                target: "authz",
                gate,
                subject = %subject,
                resource = %resource,
                rule = rule.code(),
                allowed = true,
                "Authorization granted"
            ),
            Decision::Deny(rule) => tracing::info!(
                target: "authz",
                gate,
                subject = %subject,
                resource = %resource,
                rule = rule.code(),
                allowed = false,
                "Authorization denied"
            ),
        }
        self
    }

    /// Convert into a `Result`, mapping a deny through `forbidden`.
    pub fn into_result<E>(self, forbidden: impl FnOnce(R) -> E) -> Result<R, E> {
        match self {
            Decision::Allow(rule) => Ok(rule),
            Decision::Deny(rule) => Err(forbidden(rule)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum DemoRule {
        Open,
        Closed,
    }

    impl PolicyRule for DemoRule {
        fn code(&self) -> &'static str {
            match self {
                DemoRule::Open => "open",
                DemoRule::Closed => "closed",
            }
        }

        fn message(&self) -> &'static str {
            match self {
                DemoRule::Open => "open door",
                DemoRule::Closed => "door is closed",
            }
        }
    }

    #[test]
    fn test_allow_passes_rule_through() {
        let decision = Decision::Allow(DemoRule::Open).record("demo", "u", "r");
        assert!(decision.is_allowed());
        assert_eq!(decision.into_result(|r| r.message()), Ok(DemoRule::Open));
    }

    #[test]
    fn test_deny_maps_to_error() {
        let decision = Decision::Deny(DemoRule::Closed);
        assert_eq!(decision.rule(), DemoRule::Closed);
        assert_eq!(decision.into_result(|r| r.message()), Err("door is closed"));
    }
}
