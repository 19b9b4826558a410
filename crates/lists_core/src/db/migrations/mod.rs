//! Schema versions of the lists database.
//!
//! The applied version lives in `PRAGMA user_version`; every pending step runs
//! inside one transaction together with its version bump.

use crate::repo::list_repo::{RepoError, RepoResult};
use log::info;
use rusqlite::Connection;

/// `(version, sql)` pairs, strictly increasing by version.
const SCHEMA_STEPS: &[(u32, &str)] = &[(1, include_str!("0001_lists_items.sql"))];

/// Returns the schema version this binary migrates to.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |(version, _)| *version)
}

/// Brings the schema of `conn` up to `latest_version()`.
///
/// # Errors
/// - `RepoError::UnsupportedSchemaVersion` when the file was written by a newer binary.
/// - `RepoError::Db` when a step fails; the schema is then left untouched.
pub fn apply_migrations(conn: &mut Connection) -> RepoResult<()> {
    let from_version = current_user_version(conn)?;
    let latest = latest_version();
    if from_version > latest {
        return Err(RepoError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }

    let first_pending = SCHEMA_STEPS.partition_point(|(version, _)| *version <= from_version);
    let pending = &SCHEMA_STEPS[first_pending..];
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", *version)?;
        info!("event=db_migrate module=db status=ok version={version}");
    }
    tx.commit()?;
    Ok(())
}

pub(crate) fn current_user_version(conn: &Connection) -> RepoResult<u32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?;
    Ok(version)
}
