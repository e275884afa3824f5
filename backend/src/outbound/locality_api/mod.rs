//! Locality API outbound adapter.
//!
//! A thin reqwest implementation of the `LocalitySource` port against the
//! third-party postcode search service.

mod dto;
mod http_source;

pub use http_source::{LocalityApiConfig, LocalityApiHttpSource};
