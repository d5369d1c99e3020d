//! Brand domain model.
//!
//! # Responsibility
//! - Define the canonical record for an organization under monitoring.
//! - Provide validation enforced by every repository write path.
//!
//! # Invariants
//! - `name` is the storage key: stable, unique, immutable after creation.
//! - `last_scan_date` of `None` means "never scanned".
//! - `service_level` and `description` are opaque to lifecycle logic.
//!
//! # See also
//! - docs/architecture/brand-model.md

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum accepted brand name length, in characters.
pub const BRAND_NAME_MAX_CHARS: usize = 100;

// Names double as document keys: alphanumeric edges, dots/dashes/underscores
// inside, no whitespace.
static BRAND_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9](?:[a-z0-9._-]*[a-z0-9])?$").expect("valid brand name regex")
});

/// Commercial monitoring tier attached to a brand.
///
/// Carried through storage untouched; lifecycle logic never branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceLevel {
    Gold,
    Silver,
    Bronze,
    #[default]
    None,
}

/// Canonical record for a monitored organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Unique identifier and storage key. Immutable after creation.
    pub name: String,
    /// Monitoring tier metadata.
    #[serde(default)]
    pub service_level: ServiceLevel,
    /// Free-form descriptive metadata.
    #[serde(default)]
    pub description: Option<String>,
    /// Unix epoch milliseconds of the last scan. `None` = never scanned.
    #[serde(default)]
    pub last_scan_date: Option<i64>,
}

impl Brand {
    /// Creates a brand with default metadata and no scan history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service_level: ServiceLevel::None,
            description: None,
            last_scan_date: None,
        }
    }

    /// Returns whether this brand has ever been scanned.
    pub fn is_scanned(&self) -> bool {
        self.last_scan_date.is_some()
    }

    /// Checks the record against the persistence contract.
    ///
    /// # Errors
    /// - `EmptyName` / `NameTooLong` / `InvalidName` for key violations.
    /// - `NegativeScanDate` when a scan date precedes the epoch.
    pub fn validate(&self) -> Result<(), BrandValidationError> {
        if self.name.is_empty() {
            return Err(BrandValidationError::EmptyName);
        }

        let length = self.name.chars().count();
        if length > BRAND_NAME_MAX_CHARS {
            return Err(BrandValidationError::NameTooLong {
                length,
                max: BRAND_NAME_MAX_CHARS,
            });
        }

        if !BRAND_NAME_RE.is_match(&self.name) {
            return Err(BrandValidationError::InvalidName(self.name.clone()));
        }

        if let Some(stamp) = self.last_scan_date {
            if stamp < 0 {
                return Err(BrandValidationError::NegativeScanDate(stamp));
            }
        }

        Ok(())
    }
}

/// Validation failure for a brand record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandValidationError {
    EmptyName,
    NameTooLong { length: usize, max: usize },
    InvalidName(String),
    NegativeScanDate(i64),
}

impl Display for BrandValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "brand name cannot be empty"),
            Self::NameTooLong { length, max } => {
                write!(f, "brand name length {length} exceeds maximum {max}")
            }
            Self::InvalidName(name) => write!(
                f,
                "brand name `{name}` must be alphanumeric with inner `.`, `_` or `-`"
            ),
            Self::NegativeScanDate(stamp) => {
                write!(f, "last scan date {stamp} precedes the unix epoch")
            }
        }
    }
}

impl Error for BrandValidationError {}
