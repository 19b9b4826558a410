//! Item domain record and the item-text validator.
//!
//! # Invariants
//! - `text` is never the empty string; only the exact empty string is rejected,
//!   whitespace-only text is accepted as submitted.
//! - An item failing validation is never persisted.

use super::list::ListId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of an item.
pub type ItemId = Uuid;

/// User-facing message for an empty item submission.
pub const EMPTY_ITEM_ERROR: &str = "You can't have an empty list item";

/// Single to-do entry owned by one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Owning list reference.
    pub list_id: ListId,
    pub text: String,
}

/// Validation failure for submitted item text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyText,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => f.write_str(EMPTY_ITEM_ERROR),
        }
    }
}

impl Error for ItemValidationError {}

/// Checks submitted item text before it may be persisted.
///
/// # Errors
/// - `ItemValidationError::EmptyText` when `text` is the empty string.
pub fn validate_item_text(text: &str) -> Result<(), ItemValidationError> {
    if text.is_empty() {
        return Err(ItemValidationError::EmptyText);
    }
    Ok(())
}

impl Item {
    /// Builds a validated item with a fresh identifier.
    pub fn new(list_id: ListId, text: impl Into<String>) -> Result<Self, ItemValidationError> {
        let item = Self {
            id: Uuid::new_v4(),
            list_id,
            text: text.into(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Re-checks the item invariants, e.g. for rows loaded from storage.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        validate_item_text(&self.text)
    }
}
