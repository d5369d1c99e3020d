//! Domain model for monitored brands.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep a single brand-centric shape for storage and boundary layers.
//!
//! # Invariants
//! - Every brand is identified by its unique, immutable `name`.
//! - `last_scan_date` is absent until the first successful creation stamps
//!   it, unless a caller supplied it explicitly.
//!
//! # See also
//! - docs/architecture/brand-model.md

pub mod brand;
