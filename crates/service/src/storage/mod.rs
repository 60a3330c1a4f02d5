//! Storage abstractions for service layer
//!
//! Reusable helpers for stores that persist small collections as JSON files.

pub mod json_file;
