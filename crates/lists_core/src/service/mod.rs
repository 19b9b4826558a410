//! Request handlers for the to-do lists use-cases.
//!
//! # Responsibility
//! - Turn submitted input into persisted lists/items through the repository.
//! - Decide the response of each request: render a page or redirect.
//!
//! # Invariants
//! - Validation failures are folded into render responses, never returned as errors.
//! - Handlers stay storage-agnostic and never build markup.

pub mod list_service;
pub mod page;
