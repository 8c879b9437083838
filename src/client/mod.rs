//! Public client surface + builder.
//! Internals are split into `auth` (token exchange) and `http` (dispatch).

mod auth;
mod constants;
mod http;

pub use http::ApiVersion;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::Client;
use secrecy::SecretString;
use tokio::sync::{Mutex, RwLock};
use url::Url;

use crate::error::GfError;
use constants::{DEFAULT_HOST, DEFAULT_TOKEN_TTL_DAYS, USER_AGENT};

/// The cached bearer credential. Replaced wholesale on refresh, never
/// merged; lives only as long as the client.
#[derive(Debug, Default)]
struct TokenState {
    bearer: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

/// Client for a Ghostfolio instance.
///
/// Cloning is cheap; clones share the HTTP connection pool and the cached
/// bearer token.
#[derive(Clone)]
pub struct GfClient {
    http: Client,
    host: Url,
    access_token: SecretString,
    token_ttl: TimeDelta,

    state: Arc<RwLock<TokenState>>,
    token_fetch_lock: Arc<Mutex<()>>,
}

impl GfClient {
    /// Create a new builder. The access token is the long-lived secret from
    /// the Ghostfolio user settings; everything else has a default.
    pub fn builder(access_token: impl Into<String>) -> GfClientBuilder {
        GfClientBuilder {
            access_token: SecretString::from(access_token.into()),
            host: None,
            verify_tls: None,
            user_agent: None,
            timeout: None,
            connect_timeout: None,
            token_ttl: None,
        }
    }

    /// Create a client for the default public instance with default settings.
    pub fn new(access_token: impl Into<String>) -> Result<Self, GfError> {
        Self::builder(access_token).build()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn host(&self) -> &Url {
        &self.host
    }
}

impl std::fmt::Debug for GfClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GfClient")
            .field("host", &self.host.as_str())
            .finish_non_exhaustive()
    }
}

/* ----------------------- Builder ----------------------- */

pub struct GfClientBuilder {
    access_token: SecretString,
    host: Option<Url>,
    verify_tls: Option<bool>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    token_ttl: Option<Duration>,
}

impl GfClientBuilder {
    /// Point the client at a self-hosted instance instead of `ghostfol.io`.
    pub fn host(mut self, url: Url) -> Self {
        self.host = Some(url);
        self
    }

    /// Toggle TLS certificate verification. Defaults to on; turning it off
    /// is only sensible for self-hosted instances with self-signed
    /// certificates.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = Some(verify);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Override how long an exchanged bearer token is assumed to stay
    /// valid. Default: 30 days.
    pub fn token_ttl(mut self, dur: Duration) -> Self {
        self.token_ttl = Some(dur);
        self
    }

    pub fn build(self) -> Result<GfClient, GfError> {
        let mut host = match self.host {
            Some(url) => url,
            None => Url::parse(DEFAULT_HOST)?,
        };
        // Url::join drops the last path segment unless it ends in a slash.
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if !self.verify_tls.unwrap_or(true) {
            httpb = httpb.danger_accept_invalid_certs(true);
        }
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let token_ttl = match self.token_ttl {
            Some(dur) => TimeDelta::from_std(dur).unwrap_or(TimeDelta::MAX),
            None => TimeDelta::days(DEFAULT_TOKEN_TTL_DAYS),
        };

        Ok(GfClient {
            http: httpb.build()?,
            host,
            access_token: self.access_token,
            token_ttl,
            state: Arc::new(RwLock::new(TokenState::default())),
            token_fetch_lock: Arc::new(Mutex::new(())),
        })
    }
}
