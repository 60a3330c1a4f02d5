use async_trait::async_trait;

use crate::errors::ServiceError;
use super::{AddResponse, Country, CountryPayload};

/// Persistence seam for country records.
///
/// Lookups report a missing record as `ServiceError::NotFound`; every other
/// failure is `ServiceError::Db`. Implementations must be safe to share
/// between concurrent requests.
#[async_trait]
pub trait CountryStore: Send + Sync {
    /// All records in ascending id order.
    async fn find_all(&self) -> Result<Vec<Country>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Country, ServiceError>;
    /// First record (lowest id) whose name matches exactly.
    async fn find_by_name(&self, name: &str) -> Result<Country, ServiceError>;
    /// Insert a new record. The store assigns the id; `payload.id` is ignored.
    async fn insert(&self, payload: CountryPayload) -> Result<Country, ServiceError>;
    /// Replace name and capital of the record with `country.id`.
    async fn update(&self, country: Country) -> Result<Country, ServiceError>;
    async fn delete(&self, id: i32) -> Result<AddResponse, ServiceError>;
}
