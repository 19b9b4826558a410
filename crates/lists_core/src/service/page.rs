//! Response shapes produced by the handlers.

use crate::model::item::Item;
use crate::model::list::List;
use serde::Serialize;

pub const HOME_TEMPLATE: &str = "lists/home.html";
pub const LIST_TEMPLATE: &str = "lists/list.html";

/// Context of the home page: the empty new-list form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HomeContext {
    /// Inline validation message, unescaped.
    pub error: Option<String>,
}

/// Context of one list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListContext {
    pub list: List,
    /// Items of `list` in creation order.
    pub items: Vec<Item>,
    pub error: Option<String>,
}

/// A template paired with its typed context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home(HomeContext),
    List(ListContext),
}

impl Page {
    pub fn template_name(&self) -> &'static str {
        match self {
            Self::Home(_) => HOME_TEMPLATE,
            Self::List(_) => LIST_TEMPLATE,
        }
    }
}

/// Outcome of one handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Produce markup from the page's template and context.
    Render(Page),
    /// Send the caller to another path, always `/lists/<id>/`.
    Redirect(String),
}

impl Response {
    /// Template used by a render response.
    pub fn template_name(&self) -> Option<&'static str> {
        match self {
            Self::Render(page) => Some(page.template_name()),
            Self::Redirect(_) => None,
        }
    }

    /// Target of a redirect response.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Render(_) => None,
            Self::Redirect(target) => Some(target.as_str()),
        }
    }
}
