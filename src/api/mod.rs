//! Resource wrappers over the raw HTTP verbs.
//!
//! Each method shapes parameters for one endpoint and returns the decoded
//! JSON payload verbatim; no response schemas are imposed.

mod accounts;
mod admin;
mod orders;
mod portfolio;
