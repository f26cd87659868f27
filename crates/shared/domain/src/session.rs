//! Login session entity.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// A session minted at login. Expiry is fixed at creation; there is no renewal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: Uuid,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Start a session at `created_at` lasting `duration`.
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        created_at: DateTime<Utc>,
        duration: Duration,
    ) -> DomainResult<Self> {
        let expires_at = created_at
            .checked_add_signed(duration)
            .ok_or(DomainError::SessionOutOfRange)?;

        Ok(Self {
            id,
            user_id,
            created_at,
            expires_at,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_is_creation_plus_duration() {
        let now = Utc::now();
        let session =
            Session::new(Uuid::new_v4(), Uuid::new_v4(), now, Duration::seconds(90)).unwrap();

        assert_eq!(session.created_at(), now);
        assert_eq!(session.expires_at(), now + Duration::seconds(90));
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + Duration::seconds(90)));
    }

    #[test]
    fn test_expiry_overflow_is_an_error() {
        let huge = Duration::seconds(10_000_000_000_000);

        assert_eq!(
            Session::new(Uuid::new_v4(), Uuid::new_v4(), Utc::now(), huge),
            Err(DomainError::SessionOutOfRange)
        );
        assert!(DomainError::SessionOutOfRange.is_internal());
    }
}
