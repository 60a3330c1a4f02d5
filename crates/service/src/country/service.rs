use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use super::{store::CountryStore, AddResponse, Country, CountryPayload};

/// Application service in front of a `CountryStore`.
/// Adds tracing around each store call; no business rules of its own.
#[derive(Clone)]
pub struct CountryService {
    store: Arc<dyn CountryStore>,
}

impl CountryService {
    pub fn new(store: Arc<dyn CountryStore>) -> Self { Self { store } }

    pub async fn get_all(&self) -> Result<Vec<Country>, ServiceError> {
        let all = self.store.find_all().await?;
        debug!(count = all.len(), "listed countries");
        Ok(all)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<Country, ServiceError> { self.store.find_by_id(id).await }

    #[instrument(skip(self))]
    pub async fn get_by_name(&self, name: &str) -> Result<Country, ServiceError> { self.store.find_by_name(name).await }

    #[instrument(skip(self, payload), fields(name = %payload.country_name))]
    pub async fn add(&self, payload: CountryPayload) -> Result<Country, ServiceError> {
        let created = self.store.insert(payload).await?;
        info!(id = created.id, "country created");
        Ok(created)
    }

    #[instrument(skip(self, country), fields(id = country.id))]
    pub async fn update(&self, country: Country) -> Result<Country, ServiceError> {
        let updated = self.store.update(country).await?;
        info!("country updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<AddResponse, ServiceError> {
        let ack = self.store.delete(id).await?;
        info!("country deleted");
        Ok(ack)
    }
}
