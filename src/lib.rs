//! # opgl-data
//!
//! REST data service for League of Legends summoner, match, and league
//! data, backed by the Riot Games API.
//!
//! This crate is a thin HTTP shim: it loads configuration, constructs
//! an authenticated client for the Riot API, wires that client into a
//! small set of handlers, and serves JSON over one listening socket.
//! All game data comes from upstream — this service composes, caches,
//! and reshapes it, nothing more.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── DataService (service/)
//!     ├── ResponseCache (domain/)
//!     │
//!     ├── RiotClient (riot/)
//!     │
//!     └── Riot Games API
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod riot;
pub mod server;
pub mod service;
