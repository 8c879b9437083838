//! Centralized constants for the default host, UA and token lifetime.

/// Default public Ghostfolio instance.
pub(crate) const DEFAULT_HOST: &str = "https://ghostfol.io/";

/// UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("ghostfolio-rs/", env!("CARGO_PKG_VERSION"));

/// Endpoint that exchanges a static access token for a bearer token.
/// Always lives under `v1`, regardless of the version of the call that
/// triggered the exchange.
pub(crate) const AUTH_ENDPOINT: &str = "auth/anonymous";

/// Lifetime assumed for an exchanged bearer token. The exchange response
/// does not declare one.
pub(crate) const DEFAULT_TOKEN_TTL_DAYS: i64 = 30;
