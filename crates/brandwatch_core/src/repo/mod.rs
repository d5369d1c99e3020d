//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define storage-agnostic data access contracts for brands.
//! - Isolate datalake document details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Brand::validate()` before persistence.
//! - Repository APIs surface semantic outcomes (absence, duplicate keys)
//!   separately from storage transport errors.

pub mod brand_repo;
