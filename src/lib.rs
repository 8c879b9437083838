//! ghostfolio-rs: Rust client for the Ghostfolio personal-finance API.
//!
//! The client exchanges a long-lived access token for a short-lived bearer
//! token on first use, caches it until it expires, and exposes the portfolio,
//! order, account and admin endpoints. Payloads are returned as raw
//! [`serde_json::Value`]s, exactly as the server sent them.
//!
//! ```no_run
//! use ghostfolio_rs::GfClient;
//!
//! # async fn example() -> Result<(), ghostfolio_rs::GfError> {
//! let client = GfClient::builder("my-access-token").build()?;
//! let details = client.details().await?;
//! println!("{details}");
//! # Ok(())
//! # }
//! ```

mod api;
pub mod client;
pub mod error;

pub use client::{ApiVersion, GfClient, GfClientBuilder};
pub use error::GfError;
