//! Inbound request and outbound response shapes.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Request method understood by the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// Submitted form fields, already decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Parses one `key=value` pair; text after the first `=` is kept verbatim.
    pub fn insert_pair(&mut self, pair: &str) -> Result<(), String> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("form field `{pair}` is not of the form key=value"))?;
        if key.is_empty() {
            return Err(format!("form field `{pair}` has an empty key"));
        }
        self.fields.insert(key.to_string(), value.to_string());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub form: FormData,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            form: FormData::new(),
        }
    }

    pub fn post(path: impl Into<String>, form: FormData) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            form,
        }
    }
}

/// Transport-level outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Redirect target for 3xx responses.
    pub location: Option<String>,
    /// Template the body was rendered from, if any.
    pub template: Option<&'static str>,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(template: &'static str, body: String) -> Self {
        Self {
            status: 200,
            location: None,
            template: Some(template),
            body,
        }
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            status: 302,
            location: Some(location.into()),
            template: None,
            body: String::new(),
        }
    }

    pub fn error(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            location: None,
            template: None,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }
}
