//! Service layer for country records.
//! - `country::store::CountryStore` is the persistence seam the HTTP layer talks to.
//! - Postgres (sea-orm) and JSON file/in-memory implementations live behind it.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod file;
pub mod country;
