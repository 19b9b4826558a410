//! Domain model for to-do lists and their items.
//!
//! # Invariants
//! - Lists and items are identified by store-assigned UUIDs.
//! - An item belongs to exactly one list by reference; a list holds no
//!   collection of its own.
//! - Nothing in this model is mutated after creation.

pub mod item;
pub mod list;
