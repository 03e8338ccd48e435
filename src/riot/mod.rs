//! Riot Games API client: transport, error taxonomy, and wire models.
//!
//! [`RiotClient`] is the only component that talks to the network. It is
//! constructed once from the configured API key and shared read-only for
//! the lifetime of the process.

pub mod client;
pub mod error;
pub mod types;

pub use client::RiotClient;
pub use error::RiotError;
