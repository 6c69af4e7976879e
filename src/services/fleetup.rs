// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FleetUp API client for token issuance and device location fetches.
//!
//! Handles:
//! - Bearer-token issuance against the `token` endpoint
//! - Last-known-location fetches for every device on the account
//! - Transparent token renewal when the stored credential expires

use crate::error::{CollectorError, Result};
use crate::models::LocationRecord;
use crate::services::token::{Credential, TokenStore};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Upper bound on response-body excerpts carried in error messages.
const BODY_EXCERPT_LIMIT: usize = 500;

/// Low-level FleetUp HTTP client.
#[derive(Clone)]
pub struct FleetUpClient {
    http: reqwest::Client,
    base_url: String,
    account_id: String,
    secret_key: String,
    api_key: String,
}

impl FleetUpClient {
    /// Create a new FleetUp client with account credentials.
    pub fn new(base_url: String, account_id: String, secret_key: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            account_id,
            secret_key,
            api_key,
        }
    }

    /// Request a fresh bearer token.
    ///
    /// `GET {base_url}token?acctId=..&secret=..` with the `x-api-key` header.
    pub async fn issue_token(&self) -> Result<TokenResponse> {
        let url = format!("{}token", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("acctId", self.account_id.as_str()),
                ("secret", self.secret_key.as_str()),
            ])
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| CollectorError::Auth(format!("{}: {}", url, e)))?;

        tracing::debug!(url = %url, method = "GET", status = %response.status(), "Token request completed");

        let response = check_status(response, &url)
            .await
            .map_err(CollectorError::Auth)?;

        response
            .json()
            .await
            .map_err(|e| CollectorError::Auth(format!("{}: invalid token response: {}", url, e)))
    }

    /// Fetch the last known location of every device on the account.
    ///
    /// `POST {base_url}gpsdata/device-last-location` with the `x-api-key` and
    /// `token` headers and `{ "acctId": .. }` as the body.
    pub async fn last_locations(&self, token: &str) -> Result<Vec<LocationRecord>> {
        let url = format!("{}gpsdata/device-last-location", self.base_url);
        let body = serde_json::json!({ "acctId": self.account_id });

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("token", token)
            .json(&body)
            .send()
            .await
            .map_err(|e| CollectorError::Fetch(format!("{}: {}", url, e)))?;

        tracing::debug!(url = %url, method = "POST", status = %response.status(), "Location request completed");

        let response = check_status(response, &url)
            .await
            .map_err(CollectorError::Fetch)?;

        let locations: LocationsResponse = response.json().await.map_err(|e| {
            CollectorError::Fetch(format!("{}: invalid location response: {}", url, e))
        })?;

        Ok(locations.into_records())
    }
}

/// Check response status, passing the response through for parsing or
/// returning a message carrying the status and a body excerpt.
async fn check_status(
    response: reqwest::Response,
    url: &str,
) -> std::result::Result<reqwest::Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let excerpt: String = body.chars().take(BODY_EXCERPT_LIMIT).collect();
    Err(format!("{}: HTTP {}: {}", url, status, excerpt))
}

/// Token issuance response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    /// Expiry instant as epoch seconds.
    #[serde(rename = "expireTime")]
    pub expire_time: i64,
}

impl TryFrom<TokenResponse> for Credential {
    type Error = CollectorError;

    fn try_from(response: TokenResponse) -> Result<Credential> {
        let expires_at = DateTime::<Utc>::from_timestamp(response.expire_time, 0).ok_or_else(
            || CollectorError::Auth(format!("expireTime {} is out of range", response.expire_time)),
        )?;

        Ok(Credential {
            token: response.token,
            expires_at,
        })
    }
}

/// Envelope around the device location list.
#[derive(Debug, Deserialize)]
pub struct LocationsResponse {
    data: Option<Vec<LocationRecord>>,
}

impl LocationsResponse {
    /// The device list; a missing or null `data` field is an empty fleet,
    /// not an error.
    pub fn into_records(self) -> Vec<LocationRecord> {
        self.data.unwrap_or_default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FleetUpService - token-aware fetches on top of the raw client
// ─────────────────────────────────────────────────────────────────────────────

/// High-level FleetUp service that manages the token lifecycle.
///
/// Owns the [`TokenStore`]; callers never touch the raw credential. The
/// service lives on the single scheduler task, so the check-then-refresh in
/// `ensure_valid_token` needs no locking. If concurrent fetchers are ever
/// introduced, refresh must be serialized under a mutex to avoid redundant
/// issuance storms.
pub struct FleetUpService {
    client: FleetUpClient,
    tokens: TokenStore,
}

impl FleetUpService {
    pub fn new(client: FleetUpClient) -> Self {
        Self {
            client,
            tokens: TokenStore::new(),
        }
    }

    /// Refresh the stored credential if it is missing or expired.
    ///
    /// Performs at most one issuance per call.
    async fn ensure_valid_token(&mut self) -> Result<String> {
        if !self.tokens.is_valid(Utc::now()) {
            tracing::info!("Token expired or missing, requesting a new one");
            let response = self.client.issue_token().await?;
            let credential = Credential::try_from(response)?;
            tracing::info!(expires_at = %credential.expires_at, "FleetUp token refreshed");
            self.tokens.set(credential);
        }

        match self.tokens.token() {
            Some(token) => Ok(token.to_string()),
            None => Err(CollectorError::Auth("no token after refresh".to_string())),
        }
    }

    /// Fetch the last known location of every device on the account,
    /// refreshing the token first if needed.
    pub async fn fetch(&mut self) -> Result<Vec<LocationRecord>> {
        let token = self.ensure_valid_token().await?;
        self.client.last_locations(&token).await
    }
}
