//! List domain record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a list, assigned by the store on creation.
pub type ListId = Uuid;

/// Collection boundary for items.
///
/// A list with zero items is valid; items are discovered by querying on
/// their `list_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
}

impl List {
    /// Creates a list record with a fresh identifier.
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    /// View path for this list, always of the form `/lists/<id>/`.
    pub fn view_path(&self) -> String {
        list_view_path(self.id)
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the view path of the list with `id`.
pub fn list_view_path(id: ListId) -> String {
    format!("/lists/{id}/")
}
