//! State management module
//!
//! This module holds the application core, independent of any UI concern:
//! - The film data model (data.rs)
//! - The in-memory catalog store (catalog.rs)
//! - The edit-outcome result channel (edit.rs)

pub mod catalog;
pub mod data;
pub mod edit;
