//! Bearer token exchange and caching.

use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde_json::json;
use tracing::debug;

use super::constants::AUTH_ENDPOINT;
use super::http::{ApiVersion, handle_response};
use crate::error::GfError;

impl super::GfClient {
    /// Return a bearer token that is valid at the moment of the read,
    /// exchanging the static access token for a fresh one first if needed.
    pub(crate) async fn ensure_token(&self) -> Result<String, GfError> {
        // Fast path: check for a live token with a read lock.
        if let Some(token) = self.cached_token().await {
            return Ok(token);
        }

        // Slow path: acquire the dedicated fetch lock so only one task
        // performs the exchange.
        let _guard = self.token_fetch_lock.lock().await;

        // Double-check: another task might have refreshed while this one
        // was waiting.
        if let Some(token) = self.cached_token().await {
            return Ok(token);
        }

        let token = self.exchange_access_token().await?;

        let expires_at = Utc::now()
            .checked_add_signed(self.token_ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut state = self.state.write().await;
        state.bearer = Some(token.clone());
        state.expires_at = Some(expires_at);
        Ok(token)
    }

    /// The cached bearer, if one is present and its recorded expiry is
    /// still in the future. An absent credential and an expired one are
    /// treated identically.
    async fn cached_token(&self) -> Option<String> {
        let state = self.state.read().await;
        match (&state.bearer, state.expires_at) {
            (Some(token), Some(expires_at)) if Utc::now() < expires_at => Some(token.clone()),
            _ => None,
        }
    }

    async fn exchange_access_token(&self) -> Result<String, GfError> {
        let url = self.url(AUTH_ENDPOINT, None, ApiVersion::V1)?;
        debug!(url = %url, "exchanging access token for a bearer token");

        let resp = self
            .http()
            .post(url)
            .json(&json!({ "accessToken": self.access_token.expose_secret() }))
            .send()
            .await?;

        let body = handle_response(resp).await?;
        body.get("authToken")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or_else(|| GfError::Auth("exchange response did not contain an authToken".into()))
    }
}
