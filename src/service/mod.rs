//! Service layer: orchestration over the Riot client and cache.

pub mod data_service;

pub use data_service::DataService;
