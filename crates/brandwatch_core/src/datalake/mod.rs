//! Datalake bootstrap and document-store entry points.
//!
//! # Responsibility
//! - Open and configure the SQLite-backed document store for BrandWatch core.
//! - Apply schema migrations in deterministic order.
//! - Expose keyed document primitives through [`DatalakeClient`].
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write documents before migrations succeed.
//! - The datalake stores opaque JSON bodies; it never interprets them.
//!
//! # See also
//! - docs/architecture/datalake.md

use std::error::Error;
use std::fmt::{Display, Formatter};

mod client;
pub mod migrations;
mod open;

pub use client::DatalakeClient;
pub use open::{open_datalake, open_datalake_in_memory};

pub type DatalakeResult<T> = Result<T, DatalakeError>;

#[derive(Debug)]
pub enum DatalakeError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for DatalakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "datalake schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for DatalakeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for DatalakeError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
