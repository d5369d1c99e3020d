//! Core domain logic for BrandWatch.
//! This crate is the single source of truth for brand lifecycle invariants.

pub mod datalake;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use datalake::{open_datalake, open_datalake_in_memory, DatalakeClient, DatalakeError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::brand::{Brand, BrandValidationError, ServiceLevel};
pub use repo::brand_repo::{
    BrandRepository, DatalakeBrandRepository, PageRequest, RepoError, RepoResult, ValidationError,
};
pub use service::brand_service::{BrandService, Clock, SystemClock};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
