//! Domain layer: routing values and the response cache.
//!
//! This module contains the server-side domain model: the platform and
//! continental routing values the Riot API shards on, and the TTL cache
//! for upstream-derived response views.

pub mod cache;
pub mod region;

pub use cache::ResponseCache;
pub use region::{Platform, RegionalRoute};
