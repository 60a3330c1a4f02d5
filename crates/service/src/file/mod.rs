//! File-backed store implementations.

pub mod country_store;
