//! Connection bootstrap utilities for the datalake.
//!
//! # Responsibility
//! - Open file or in-memory document stores.
//! - Configure connection pragmas required by core behavior.
//! - Trigger schema migrations before handing out a usable client.
//!
//! # Invariants
//! - Returned clients have `foreign_keys=ON` and a bounded busy timeout.
//! - Returned clients have migrations fully applied.

use super::client::DatalakeClient;
use super::migrations::apply_migrations;
use super::DatalakeResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a file-backed datalake and applies all pending migrations.
///
/// # Side effects
/// - Performs connection bootstrap and migration checks.
/// - Emits `datalake_open` logging events with duration and status.
pub fn open_datalake(path: impl AsRef<Path>) -> DatalakeResult<DatalakeClient> {
    let started_at = Instant::now();
    info!("event=datalake_open module=datalake status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=datalake_open module=datalake status=error mode=file duration_ms={} error_code=open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(conn) {
        Ok(client) => {
            info!(
                "event=datalake_open module=datalake status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(client)
        }
        Err(err) => {
            error!(
                "event=datalake_open module=datalake status=error mode=file duration_ms={} error_code=bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory datalake and applies all pending migrations.
///
/// # Side effects
/// - Performs connection bootstrap and migration checks.
/// - Emits `datalake_open` logging events with duration and status.
pub fn open_datalake_in_memory() -> DatalakeResult<DatalakeClient> {
    let started_at = Instant::now();
    info!("event=datalake_open module=datalake status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=datalake_open module=datalake status=error mode=memory duration_ms={} error_code=open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(conn) {
        Ok(client) => {
            info!(
                "event=datalake_open module=datalake status=ok mode=memory duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(client)
        }
        Err(err) => {
            error!(
                "event=datalake_open module=datalake status=error mode=memory duration_ms={} error_code=bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(mut conn: Connection) -> DatalakeResult<DatalakeClient> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(&mut conn)?;
    DatalakeClient::from_connection(conn)
}
