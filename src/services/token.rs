// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer-token state for the FleetUp API.

use chrono::{DateTime, Utc};

/// An issued bearer token plus its expiry instant.
///
/// Replaced whole on every refresh; the two fields are never updated
/// independently.
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Holds the current credential and decides when a refresh is due.
///
/// Owned by [`crate::services::FleetUpService`] and confined to the single
/// scheduler task, so no interior locking is needed.
#[derive(Debug, Default)]
pub struct TokenStore {
    current: Option<Credential>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// True iff a token is present, non-empty and strictly unexpired at `now`.
    ///
    /// A token expiring exactly at `now` is already invalid.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        match &self.current {
            Some(credential) => !credential.token.is_empty() && now < credential.expires_at,
            None => false,
        }
    }

    /// Replace the stored credential with a freshly issued one.
    pub fn set(&mut self, credential: Credential) {
        self.current = Some(credential);
    }

    /// The current token, if one was ever issued.
    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn credential(token: &str, expires_at: DateTime<Utc>) -> Credential {
        Credential {
            token: token.to_string(),
            expires_at,
        }
    }

    #[test]
    fn unset_store_is_invalid() {
        let store = TokenStore::new();
        assert!(!store.is_valid(Utc::now()));
        assert!(store.token().is_none());
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let expiry = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let mut store = TokenStore::new();
        store.set(credential("tok", expiry));

        assert!(store.is_valid(expiry - Duration::seconds(1)));
        assert!(
            !store.is_valid(expiry),
            "a token expiring exactly now must not be valid"
        );
        assert!(!store.is_valid(expiry + Duration::seconds(1)));
    }

    #[test]
    fn empty_token_is_invalid_even_before_expiry() {
        let expiry = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let mut store = TokenStore::new();
        store.set(credential("", expiry));

        assert!(!store.is_valid(expiry - Duration::hours(1)));
    }

    #[test]
    fn set_replaces_token_and_expiry_together() {
        let first_expiry = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let mut store = TokenStore::new();
        store.set(credential("first", first_expiry));

        let second_expiry = first_expiry + Duration::hours(1);
        store.set(credential("second", second_expiry));

        assert_eq!(store.token(), Some("second"));
        assert!(store.is_valid(first_expiry + Duration::minutes(30)));
    }
}
