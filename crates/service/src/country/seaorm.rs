use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::country as entity;

use crate::errors::ServiceError;
use super::{store::CountryStore, AddResponse, Country, CountryPayload};

/// SeaORM-backed store over the `country` table.
#[derive(Clone)]
pub struct SeaOrmCountryStore {
    pub db: DatabaseConnection,
}

impl SeaOrmCountryStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CountryStore for SeaOrmCountryStore {
    async fn find_all(&self) -> Result<Vec<Country>, ServiceError> {
        Ok(entity::list(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Country, ServiceError> {
        Ok(entity::find_by_id(&self.db, id).await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Country, ServiceError> {
        Ok(entity::find_by_name(&self.db, name).await?)
    }

    async fn insert(&self, payload: CountryPayload) -> Result<Country, ServiceError> {
        Ok(entity::create(&self.db, &payload.country_name, &payload.country_capital).await?)
    }

    async fn update(&self, country: Country) -> Result<Country, ServiceError> {
        Ok(entity::update_fields(&self.db, country.id, &country.country_name, &country.country_capital).await?)
    }

    async fn delete(&self, id: i32) -> Result<AddResponse, ServiceError> {
        Ok(entity::delete(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_store_roundtrip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let store = SeaOrmCountryStore::new(db);

        let name = format!("seaorm_store_{}", uuid::Uuid::new_v4());
        let created = store.insert(CountryPayload::new(name.as_str(), "Santiago").with_id(-5)).await?;
        assert!(created.id > 0, "payload id must be ignored");

        let mut changed = store.find_by_name(&name).await?;
        changed.country_capital = "Valparaiso".into();
        store.update(changed).await?;
        assert_eq!(store.find_by_id(created.id).await?.country_capital, "Valparaiso");

        let ack = store.delete(created.id).await?;
        assert_eq!(ack.id, created.id);
        assert!(store.find_by_id(created.id).await.unwrap_err().is_not_found());
        Ok(())
    }
}
