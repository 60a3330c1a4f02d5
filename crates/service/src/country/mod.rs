pub mod store;
pub mod seaorm;
pub mod service;

pub use models::country::{AddResponse, Country, CountryPayload};
