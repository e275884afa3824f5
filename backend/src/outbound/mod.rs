//! Outbound adapters implementing domain ports over HTTP.
//!
//! - **locality_api**: reqwest adapter for the third-party locality search
//!   service (`LocalitySource`).
//! - **lookup_client**: reqwest client for a running validator server
//!   (`LocalityLookup`), used by the form CLI.
//!
//! Adapters translate between wire payloads and domain types. They contain
//! no business logic.

pub mod locality_api;
pub mod lookup_client;
