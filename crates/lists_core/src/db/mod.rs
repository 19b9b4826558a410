//! SQLite bootstrap for the entity store.
//!
//! Connections handed out here are migrated and ready for
//! `SqliteListRepository`. Failures surface as `RepoError`, the same error the
//! store itself reports.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
