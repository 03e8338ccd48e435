//! Data Transfer Objects for REST request/response serialization.
//!
//! These are the service's own response shapes, composed from the
//! upstream wire models in [`crate::riot::types`].

pub mod common_dto;
pub mod league_dto;
pub mod match_dto;
pub mod summoner_dto;

pub use common_dto::*;
pub use league_dto::*;
pub use match_dto::*;
pub use summoner_dto::*;
