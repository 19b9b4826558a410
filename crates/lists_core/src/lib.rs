//! Core request handling for the to-do lists application.
//! This crate decides how submitted input becomes persisted lists and items,
//! and which response each request produces.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod web;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{validate_item_text, Item, ItemId, ItemValidationError, EMPTY_ITEM_ERROR};
pub use model::list::{list_view_path, List, ListId};
pub use repo::list_repo::{ListRepository, RepoError, RepoResult, SqliteListRepository};
pub use service::list_service::{HandlerError, HandlerResult, ItemForm, ListService};
pub use service::page::{HomeContext, ListContext, Page, Response, HOME_TEMPLATE, LIST_TEMPLATE};
pub use web::render::{escape_html, HtmlRenderer, TemplateRenderer};
pub use web::request::{FormData, HttpResponse, Method, Request};
pub use web::router::{resolve, Route, Router};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
