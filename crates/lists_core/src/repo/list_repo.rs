//! List/item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Create and read lists and items over the `lists`/`items` tables.
//! - Provide a scoped transaction for multi-step writes.
//!
//! # Invariants
//! - `create_item` never persists invalid text and never creates a list.
//! - `list_items` returns items in insertion order (`seq ASC`).
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::{current_user_version, latest_version};
use crate::model::item::{validate_item_text, Item, ItemId, ItemValidationError};
use crate::model::list::{List, ListId};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for list/item persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ItemValidationError),
    Db(rusqlite::Error),
    /// The database file was written by a newer schema than this binary knows.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    NotFound(ListId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::NotFound(id) => write!(f, "list not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(value)
    }
}

/// Entity-store contract for lists and items.
pub trait ListRepository {
    /// Allocates and persists a new empty list.
    fn create_list(&self) -> RepoResult<ListId>;
    /// Persists one item bound to `list_id` after validating `text`.
    fn create_item(&self, text: &str, list_id: ListId) -> RepoResult<ItemId>;
    /// Gets one list by id.
    fn get_list(&self, list_id: ListId) -> RepoResult<Option<List>>;
    /// Lists items of one list in creation order.
    fn list_items(&self, list_id: ListId) -> RepoResult<Vec<Item>>;
    /// Counts all persisted lists.
    fn count_lists(&self) -> RepoResult<u64>;
    /// Counts all persisted items.
    fn count_items(&self) -> RepoResult<u64>;
    /// Runs `f` inside one transaction: committed on `Ok`, rolled back on `Err`.
    fn in_transaction<T, F>(&self, f: F) -> RepoResult<T>
    where
        F: FnOnce(&Self) -> RepoResult<T>;
}

/// SQLite-backed list repository.
pub struct SqliteListRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteListRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` when `lists` or `items` is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ListRepository for SqliteListRepository<'_> {
    fn create_list(&self) -> RepoResult<ListId> {
        let list = List::new();
        self.conn.execute(
            "INSERT INTO lists (uuid) VALUES (?1);",
            [list.id.to_string()],
        )?;
        debug!("event=list_insert module=repo status=ok list_id={}", list.id);
        Ok(list.id)
    }

    fn create_item(&self, text: &str, list_id: ListId) -> RepoResult<ItemId> {
        validate_item_text(text)?;
        if self.get_list(list_id)?.is_none() {
            return Err(RepoError::NotFound(list_id));
        }

        let item = Item::new(list_id, text)?;
        self.conn.execute(
            "INSERT INTO items (uuid, list_uuid, text) VALUES (?1, ?2, ?3);",
            params![item.id.to_string(), list_id.to_string(), item.text.as_str()],
        )?;
        debug!(
            "event=item_insert module=repo status=ok list_id={} item_id={}",
            list_id, item.id
        );
        Ok(item.id)
    }

    fn get_list(&self, list_id: ListId) -> RepoResult<Option<List>> {
        let uuid_text: Option<String> = self
            .conn
            .query_row(
                "SELECT uuid FROM lists WHERE uuid = ?1;",
                [list_id.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        match uuid_text {
            Some(value) => Ok(Some(List {
                id: parse_uuid(&value, "lists.uuid")?,
            })),
            None => Ok(None),
        }
    }

    fn list_items(&self, list_id: ListId) -> RepoResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, list_uuid, text
             FROM items
             WHERE list_uuid = ?1
             ORDER BY seq ASC;",
        )?;
        let mut rows = stmt.query([list_id.to_string()])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn count_lists(&self) -> RepoResult<u64> {
        count_rows(self.conn, "lists")
    }

    fn count_items(&self) -> RepoResult<u64> {
        count_rows(self.conn, "items")
    }

    fn in_transaction<T, F>(&self, f: F) -> RepoResult<T>
    where
        F: FnOnce(&Self) -> RepoResult<T>,
    {
        // Statements issued by `f` go through `self.conn` and join `tx`.
        let tx = self.conn.unchecked_transaction()?;
        let value = f(self)?;
        tx.commit()?;
        Ok(value)
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let uuid_text: String = row.get("uuid")?;
    let list_text: String = row.get("list_uuid")?;
    let item = Item {
        id: parse_uuid(&uuid_text, "items.uuid")?,
        list_id: parse_uuid(&list_text, "items.list_uuid")?,
        text: row.get("text")?,
    };
    item.validate().map_err(|_| {
        RepoError::InvalidData(format!("empty text in items.text for item {}", item.id))
    })?;
    Ok(item)
}

fn parse_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

fn count_rows(conn: &Connection, table: &'static str) -> RepoResult<u64> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })?;
    u64::try_from(count)
        .map_err(|_| RepoError::InvalidData(format!("negative row count for `{table}`")))
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in ["lists", "items"] {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
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
