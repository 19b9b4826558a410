//! Minimal transport glue around the handlers.
//!
//! # Responsibility
//! - Map request paths to handlers (the routing table).
//! - Render pages into HTML and map outcomes onto HTTP-like responses.
//!
//! # Invariants
//! - Handlers never see raw paths; list ids are parsed here.
//! - Every interpolated value in rendered markup is HTML-escaped.

pub mod render;
pub mod request;
pub mod router;
