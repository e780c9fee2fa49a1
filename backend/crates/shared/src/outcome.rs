//! Outcome of a committed write followed by best-effort compensations
//!
//! Cross-context writes are not transactional. The primary write commits
//! first; follow-up writes in other contexts (owner subscription on create,
//! reaction cleanup on post delete, ...) may fail afterwards. Instead of
//! swallowing those failures the caller gets them back in [`Committed`].

use std::fmt;

/// A compensating call that did not succeed and still has to be repaired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCompensation {
    pub action: &'static str,
    pub target: String,
    pub reason: String,
}

impl fmt::Display for PendingCompensation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}: {}", self.action, self.target, self.reason)
    }
}

#[must_use = "a committed outcome may carry pending compensations"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed<T> {
    value: T,
    pending: Vec<PendingCompensation>,
}

impl<T> Committed<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            pending: Vec::new(),
        }
    }

    /// Record the result of a compensating call.
    ///
    /// Returns the call's value on success. On failure the error is logged
    /// and kept as a [`PendingCompensation`].
    pub fn compensate<U, E>(
        &mut self,
        action: &'static str,
        target: impl fmt::Display,
        result: Result<U, E>,
    ) -> Option<U>
    where
        E: fmt::Display,
    {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                let target = target.to_string();
                tracing::warn!(
                    action,
                    target = %target,
                    error = %err,
                    "Compensating call failed, left pending"
                );
                self.pending.push(PendingCompensation {
                    action,
                    target,
                    reason: err.to_string(),
                });
                None
            }
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn pending(&self) -> &[PendingCompensation] {
        &self.pending
    }

    pub fn compensation_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn into_parts(self) -> (T, Vec<PendingCompensation>) {
        (self.value, self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::app_error::AppError;

    #[test]
    fn test_clean_commit() {
        let mut outcome = Committed::new(7u8);
        let value = outcome.compensate("noop", "x", Ok::<_, AppError>(3u64));
        assert_eq!(value, Some(3));
        assert!(!outcome.compensation_pending());
        assert_eq!(outcome.into_value(), 7);
    }

    #[test]
    fn test_failed_compensation_is_kept() {
        let mut outcome = Committed::new("community");
        let value = outcome.compensate(
            "create_owner_subscription",
            "c-1",
            Err::<(), _>(AppError::internal("store offline")),
        );
        assert!(value.is_none());
        assert!(outcome.compensation_pending());

        let (_, pending) = outcome.into_parts();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].action, "create_owner_subscription");
        assert_eq!(pending[0].target, "c-1");
        assert!(pending[0].reason.contains("store offline"));
    }
}
