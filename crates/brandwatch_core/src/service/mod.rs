//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into brand lifecycle APIs.
//! - Keep boundary layers decoupled from storage details.
//!
//! # Invariants
//! - Storage faults never escape a service entry point; they are logged and
//!   narrowed to an absent/`false` result.
//! - Pagination validation failures propagate to the boundary unchanged.

pub mod brand_service;
