//! HTML rendering of handler pages.

use crate::service::page::{HomeContext, ListContext, Page};

/// Produces markup from a page's template and context.
pub trait TemplateRenderer {
    fn render(&self, page: &Page) -> String;
}

/// Built-in renderer for the home and list templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl TemplateRenderer for HtmlRenderer {
    fn render(&self, page: &Page) -> String {
        match page {
            Page::Home(context) => render_home(context),
            Page::List(context) => render_list(context),
        }
    }
}

/// Escapes text for HTML element and attribute content.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn render_home(context: &HomeContext) -> String {
    let mut html = page_head("To-Do lists");
    html.push_str("<h1>Start a new To-Do list</h1>\n");
    push_item_form(&mut html, "/lists/new", context.error.as_deref());
    html.push_str(PAGE_TAIL);
    html
}

fn render_list(context: &ListContext) -> String {
    let mut html = page_head("To-Do lists");
    html.push_str("<h1>Your To-Do list</h1>\n");
    push_item_form(
        &mut html,
        &context.list.view_path(),
        context.error.as_deref(),
    );
    html.push_str("<table id=\"id_list_table\">\n");
    for (position, item) in context.items.iter().enumerate() {
        html.push_str(&format!(
            "<tr><td>{}: {}</td></tr>\n",
            position + 1,
            escape_html(&item.text)
        ));
    }
    html.push_str("</table>\n");
    html.push_str(PAGE_TAIL);
    html
}

fn page_head(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n",
        escape_html(title)
    )
}

fn push_item_form(html: &mut String, action: &str, error: Option<&str>) {
    html.push_str(&format!(
        "<form method=\"POST\" action=\"{}\">\n",
        escape_html(action)
    ));
    html.push_str(
        "<input name=\"item_text\" id=\"id_new_item\" placeholder=\"Enter a to-do item\" />\n",
    );
    if let Some(message) = error {
        html.push_str(&format!(
            "<div class=\"has-error\"><span class=\"help-block\">{}</span></div>\n",
            escape_html(message)
        ));
    }
    html.push_str("</form>\n");
}

const PAGE_TAIL: &str = "</body>\n</html>\n";

#[cfg(test)]
mod tests {
    use super::{escape_html, HtmlRenderer, TemplateRenderer};
    use crate::model::item::{Item, EMPTY_ITEM_ERROR};
    use crate::model::list::List;
    use crate::service::page::{HomeContext, ListContext, Page};
    use uuid::Uuid;

    #[test]
    fn escape_html_covers_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn home_error_is_rendered_escaped() {
        let page = Page::Home(HomeContext {
            error: Some(EMPTY_ITEM_ERROR.to_string()),
        });
        let html = HtmlRenderer.render(&page);
        assert!(html.contains("You can&#x27;t have an empty list item"));
        assert!(!html.contains(EMPTY_ITEM_ERROR));
    }

    #[test]
    fn list_page_escapes_item_text_and_keeps_order() {
        let list = List::new();
        let items = vec![
            Item {
                id: Uuid::new_v4(),
                list_id: list.id,
                text: "<b>first</b>".to_string(),
            },
            Item {
                id: Uuid::new_v4(),
                list_id: list.id,
                text: "second".to_string(),
            },
        ];
        let html = HtmlRenderer.render(&Page::List(ListContext {
            list,
            items,
            error: None,
        }));

        assert!(html.contains("1: &lt;b&gt;first&lt;/b&gt;"));
        let first = html.find("1: ").unwrap();
        let second = html.find("2: second").unwrap();
        assert!(first < second);
        assert!(html.contains(&format!("action=\"/lists/{}/\"", list.id)));
    }

    #[test]
    fn form_error_and_rows_are_emitted_one_per_line() {
        let list = List::new();
        let item = Item {
            id: Uuid::new_v4(),
            list_id: list.id,
            text: "only".to_string(),
        };
        let html = HtmlRenderer.render(&Page::List(ListContext {
            list,
            items: vec![item],
            error: Some(EMPTY_ITEM_ERROR.to_string()),
        }));
        let lines: Vec<_> = html.lines().collect();

        let form_line = format!("<form method=\"POST\" action=\"/lists/{}/\">", list.id);
        assert!(lines.contains(&form_line.as_str()));
        assert!(lines.contains(
            &"<div class=\"has-error\"><span class=\"help-block\">You can&#x27;t have an empty list item</span></div>"
        ));
        assert!(lines.contains(&"<tr><td>1: only</td></tr>"));
        assert!(html.ends_with("</html>\n"));
    }
}
