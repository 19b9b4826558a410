//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the entity-store contract the handlers depend on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Item writes validate text before any SQL mutation.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`) in
//!   addition to DB transport errors.

pub mod list_repo;
