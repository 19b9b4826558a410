//! List use-case service: the home, new-list, view-list and add-item handlers.
//!
//! # Invariants
//! - A successful `new_list` commits the list and its first item together.
//! - A rejected submission persists nothing.
//! - Unknown list ids surface as `HandlerError::NotFound`.

use crate::model::item::validate_item_text;
use crate::model::list::{list_view_path, List, ListId};
use crate::repo::list_repo::{ListRepository, RepoError};
use crate::service::page::{HomeContext, ListContext, Page, Response};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Errors a handler hands back to the transport layer.
#[derive(Debug)]
pub enum HandlerError {
    /// Referenced list does not exist.
    NotFound(ListId),
    /// Persistence-layer failure; not retried.
    Repo(RepoError),
}

impl Display for HandlerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "list not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<RepoError> for HandlerError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Submitted new-item form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    /// Raw submitted text; a missing field is treated as empty.
    pub item_text: String,
}

impl ItemForm {
    pub fn new(item_text: impl Into<String>) -> Self {
        Self {
            item_text: item_text.into(),
        }
    }
}

/// Handler facade over a list repository.
pub struct ListService<R: ListRepository> {
    repo: R,
}

impl<R: ListRepository> ListService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the underlying store.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Renders the empty new-list form. Never touches the store.
    pub fn home(&self) -> Response {
        Response::Render(Page::Home(HomeContext::default()))
    }

    /// Creates a list with its first item, or re-renders home with the error.
    ///
    /// # Contract
    /// - Valid text: redirects to `/lists/<new id>/`.
    /// - Empty text: renders `lists/home.html` with `error`; no list or item is created.
    /// - Storage failure after the list insert rolls the list back.
    pub fn new_list(&self, form: &ItemForm) -> HandlerResult<Response> {
        if let Err(err) = validate_item_text(&form.item_text) {
            info!("event=list_create module=service status=rejected reason=empty_item_text");
            return Ok(Response::Render(Page::Home(HomeContext {
                error: Some(err.to_string()),
            })));
        }

        let created = self.repo.in_transaction(|repo| {
            let list_id = repo.create_list()?;
            repo.create_item(&form.item_text, list_id)?;
            Ok(list_id)
        });
        let list_id = created.map_err(|err| {
            error!("event=list_create module=service status=error error={err}");
            err
        })?;

        info!("event=list_create module=service status=ok list_id={list_id}");
        Ok(Response::Redirect(list_view_path(list_id)))
    }

    /// Renders one list with its items in creation order.
    pub fn view_list(&self, list_id: ListId) -> HandlerResult<Response> {
        let list = self.resolve_list(list_id)?;
        let items = self.repo.list_items(list.id)?;
        Ok(Response::Render(Page::List(ListContext {
            list,
            items,
            error: None,
        })))
    }

    /// Appends one item to an existing list.
    ///
    /// # Contract
    /// - Valid text: exactly one item is added, then redirects to the list view.
    /// - Empty text: re-renders `lists/list.html` for the list with `error` set.
    pub fn add_item(&self, list_id: ListId, form: &ItemForm) -> HandlerResult<Response> {
        let list = self.resolve_list(list_id)?;

        if let Err(err) = validate_item_text(&form.item_text) {
            info!(
                "event=item_add module=service status=rejected reason=empty_item_text list_id={list_id}"
            );
            let items = self.repo.list_items(list.id)?;
            return Ok(Response::Render(Page::List(ListContext {
                list,
                items,
                error: Some(err.to_string()),
            })));
        }

        let item_id = self.repo.create_item(&form.item_text, list.id)?;
        info!("event=item_add module=service status=ok list_id={list_id} item_id={item_id}");
        Ok(Response::Redirect(list.view_path()))
    }

    fn resolve_list(&self, list_id: ListId) -> HandlerResult<List> {
        self.repo.get_list(list_id)?.ok_or_else(|| {
            info!("event=list_resolve module=service status=not_found list_id={list_id}");
            HandlerError::NotFound(list_id)
        })
    }
}
