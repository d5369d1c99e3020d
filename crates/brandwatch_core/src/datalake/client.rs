//! Keyed document primitives over migrated datalake connections.
//!
//! # Responsibility
//! - Provide find-by-key, paginated scan, conditional insert, upsert and
//!   delete primitives over the `documents` table.
//! - Validate connection readiness before exposing any primitive.
//!
//! # Invariants
//! - Bodies are opaque text; callers own (de)serialization.
//! - `insert_if_absent` is a single conditional write, never check-then-act.
//! - Scan order is insertion order (`created_at`, then `doc_key`).
//!
//! # See also
//! - docs/architecture/datalake.md

use super::migrations::latest_version;
use super::{DatalakeError, DatalakeResult};
use rusqlite::{params, Connection};

const REQUIRED_COLUMNS: &[&str] = &["collection", "doc_key", "body", "created_at", "updated_at"];

/// Handle over a migrated datalake connection.
#[derive(Debug)]
pub struct DatalakeClient {
    conn: Connection,
}

impl DatalakeClient {
    /// Wraps an already-bootstrapped connection after readiness checks.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version is behind the
    ///   version this binary requires.
    /// - `UnsupportedSchemaVersion` when the store was written by a newer
    ///   binary.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not match the migration the version claims.
    pub fn from_connection(conn: Connection) -> DatalakeResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self { conn })
    }

    /// Returns the schema version of the underlying store.
    pub fn schema_version(&self) -> DatalakeResult<u32> {
        let version = self
            .conn
            .query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        Ok(version)
    }

    /// Gets one document body by key.
    pub fn get(&self, collection: &str, key: &str) -> DatalakeResult<Option<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT body
             FROM documents
             WHERE collection = ?1
               AND doc_key = ?2;",
        )?;

        let mut rows = stmt.query(params![collection, key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    /// Returns every document body in the collection, insertion order.
    pub fn scan(&self, collection: &str) -> DatalakeResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT body
             FROM documents
             WHERE collection = ?1
             ORDER BY created_at ASC, doc_key ASC;",
        )?;

        let mut rows = stmt.query([collection])?;
        let mut bodies = Vec::new();
        while let Some(row) = rows.next()? {
            bodies.push(row.get(0)?);
        }

        Ok(bodies)
    }

    /// Returns at most `limit` bodies starting at `offset`, insertion order.
    ///
    /// An offset past the end of the collection yields an empty vec.
    pub fn scan_page(
        &self,
        collection: &str,
        limit: u32,
        offset: u64,
    ) -> DatalakeResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT body
             FROM documents
             WHERE collection = ?1
             ORDER BY created_at ASC, doc_key ASC
             LIMIT ?2 OFFSET ?3;",
        )?;

        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        let mut rows = stmt.query(params![collection, i64::from(limit), offset])?;
        let mut bodies = Vec::new();
        while let Some(row) = rows.next()? {
            bodies.push(row.get(0)?);
        }

        Ok(bodies)
    }

    /// Inserts a document only when the key is absent.
    ///
    /// Returns `false` when a document with the same key already exists.
    /// The conflict check and the insert are one SQL statement, so two
    /// racing inserts for the same key resolve to exactly one winner.
    pub fn insert_if_absent(
        &self,
        collection: &str,
        key: &str,
        body: &str,
    ) -> DatalakeResult<bool> {
        let changed = self.conn.execute(
            "INSERT INTO documents (collection, doc_key, body)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (collection, doc_key) DO NOTHING;",
            params![collection, key, body],
        )?;

        Ok(changed > 0)
    }

    /// Fully overwrites a document body, creating it when absent.
    pub fn upsert(&self, collection: &str, key: &str, body: &str) -> DatalakeResult<bool> {
        let changed = self.conn.execute(
            "INSERT INTO documents (collection, doc_key, body)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (collection, doc_key) DO UPDATE SET
                body = excluded.body,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![collection, key, body],
        )?;

        Ok(changed > 0)
    }

    /// Removes a document by key.
    ///
    /// Returns `true` only when a document was actually removed.
    pub fn delete(&self, collection: &str, key: &str) -> DatalakeResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM documents
             WHERE collection = ?1
               AND doc_key = ?2;",
            params![collection, key],
        )?;

        Ok(changed > 0)
    }
}

fn ensure_connection_ready(conn: &Connection) -> DatalakeResult<()> {
    let expected_version = latest_version();
    let actual_version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;

    if actual_version < expected_version {
        return Err(DatalakeError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    if actual_version > expected_version {
        return Err(DatalakeError::UnsupportedSchemaVersion {
            db_version: actual_version,
            latest_supported: expected_version,
        });
    }

    if !table_exists(conn, "documents")? {
        return Err(DatalakeError::MissingRequiredTable("documents"));
    }

    for column in REQUIRED_COLUMNS {
        if !table_has_column(conn, "documents", column)? {
            return Err(DatalakeError::MissingRequiredColumn {
                table: "documents",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> DatalakeResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> DatalakeResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
