//! Routing table and response mapping.
//!
//! | Path            | Method | Handler    |
//! |-----------------|--------|------------|
//! | `/`             | any    | home       |
//! | `/lists/new`    | POST   | new_list   |
//! | `/lists/<id>/`  | GET    | view_list  |
//! | `/lists/<id>/`  | POST   | add_item   |

use crate::repo::list_repo::ListRepository;
use crate::service::list_service::{HandlerError, HandlerResult, ItemForm, ListService};
use crate::service::page::Response;
use crate::web::render::TemplateRenderer;
use crate::web::request::{FormData, HttpResponse, Method, Request};
use log::{debug, error};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

static HOME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/$").expect("valid home regex"));
static NEW_LIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/lists/new$").expect("valid new-list regex"));
static VIEW_LIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/lists/([^/]+)/$").expect("valid view-list regex"));

const ITEM_TEXT_FIELD: &str = "item_text";

/// Route resolved from a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    NewList,
    /// Raw `<list_id>` path segment, not yet parsed.
    List(String),
}

/// Resolves a path against the routing table.
pub fn resolve(path: &str) -> Option<Route> {
    if HOME_RE.is_match(path) {
        return Some(Route::Home);
    }
    if NEW_LIST_RE.is_match(path) {
        return Some(Route::NewList);
    }
    VIEW_LIST_RE
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|segment| Route::List(segment.as_str().to_string()))
}

/// Dispatches requests to a `ListService` and renders the outcome.
pub struct Router<R: ListRepository, T: TemplateRenderer> {
    service: ListService<R>,
    renderer: T,
}

impl<R: ListRepository, T: TemplateRenderer> Router<R, T> {
    pub fn new(service: ListService<R>, renderer: T) -> Self {
        Self { service, renderer }
    }

    pub fn service(&self) -> &ListService<R> {
        &self.service
    }

    /// Handles one request end to end. Never panics; faults map to 5xx.
    pub fn handle(&self, request: &Request) -> HttpResponse {
        debug!(
            "event=request module=web status=start method={} path={}",
            request.method, request.path
        );

        let Some(route) = resolve(&request.path) else {
            return HttpResponse::error(404, "Not Found");
        };

        let outcome = match (route, request.method) {
            (Route::Home, _) => Ok(self.service.home()),
            (Route::NewList, Method::Post) => self.service.new_list(&item_form(&request.form)),
            (Route::List(segment), method) => match Uuid::parse_str(&segment) {
                Ok(list_id) => match method {
                    Method::Get => self.service.view_list(list_id),
                    Method::Post => self
                        .service
                        .add_item(list_id, &item_form(&request.form)),
                },
                Err(_) => return HttpResponse::error(404, "Not Found"),
            },
            (Route::NewList, Method::Get) => {
                return HttpResponse::error(405, "Method Not Allowed");
            }
        };

        self.respond(outcome)
    }

    fn respond(&self, outcome: HandlerResult<Response>) -> HttpResponse {
        match outcome {
            Ok(Response::Render(page)) => {
                HttpResponse::ok(page.template_name(), self.renderer.render(&page))
            }
            Ok(Response::Redirect(target)) => HttpResponse::redirect(target),
            Err(HandlerError::NotFound(_)) => HttpResponse::error(404, "Not Found"),
            Err(HandlerError::Repo(err)) => {
                error!("event=request module=web status=error error_code=repo_failed error={err}");
                HttpResponse::error(500, "Internal Server Error")
            }
        }
    }
}

fn item_form(form: &FormData) -> ItemForm {
    ItemForm::new(form.get(ITEM_TEXT_FIELD).unwrap_or_default())
}
