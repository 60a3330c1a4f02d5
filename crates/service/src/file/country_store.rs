use std::{collections::{BTreeMap, BTreeSet}, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::country::{store::CountryStore, AddResponse, Country, CountryPayload};
use crate::errors::ServiceError;
use crate::storage::json_file::JsonFile;

/// Country store keeping records in a `BTreeMap` keyed by id.
///
/// With a file path every mutation rewrites the JSON file; without one the
/// store lives purely in memory. Ids are assigned as `max(id) + 1`.
#[derive(Clone)]
pub struct JsonCountryStore {
    inner: Arc<RwLock<BTreeMap<i32, Country>>>,
    file: Option<JsonFile>,
}

impl JsonCountryStore {
    /// Initialize the store from a path. Creates the file with an empty list if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file = JsonFile::new(path);
        let rows: Vec<Country> = file.load_or_init().await?;
        debug!(path = %file.path().display(), count = rows.len(), "loaded countries");
        let mut seen = BTreeSet::new();
        if let Some(dup) = rows.iter().find(|c| !seen.insert(c.id)) {
            warn!(path = %file.path().display(), id = dup.id, "duplicate id in store file");
            return Err(ServiceError::Db(format!("duplicate country id {} in {}", dup.id, file.path().display())));
        }
        Ok(Arc::new(Self::from_rows(rows, Some(file))))
    }

    /// Store without persistence.
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self::from_rows(Vec::new(), None))
    }

    /// In-memory store pre-populated with `rows` (ids kept as given).
    pub fn with_countries(rows: Vec<Country>) -> Arc<Self> {
        Arc::new(Self::from_rows(rows, None))
    }

    fn from_rows(rows: Vec<Country>, file: Option<JsonFile>) -> Self {
        let map = rows.into_iter().map(|c| (c.id, c)).collect();
        Self { inner: Arc::new(RwLock::new(map)), file }
    }

    async fn save(&self, map: &BTreeMap<i32, Country>) -> Result<(), ServiceError> {
        let Some(file) = &self.file else { return Ok(()) };
        let rows: Vec<&Country> = map.values().collect();
        file.save(&rows).await
    }
}

#[async_trait]
impl CountryStore for JsonCountryStore {
    async fn find_all(&self) -> Result<Vec<Country>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Country, ServiceError> {
        let map = self.inner.read().await;
        map.get(&id).cloned().ok_or_else(|| ServiceError::not_found(&format!("country {id}")))
    }

    async fn find_by_name(&self, name: &str) -> Result<Country, ServiceError> {
        let map = self.inner.read().await;
        map.values()
            .find(|c| c.country_name == name)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(&format!("country named {name}")))
    }

    async fn insert(&self, payload: CountryPayload) -> Result<Country, ServiceError> {
        let mut map = self.inner.write().await;
        let id = match map.keys().next_back() {
            None => 1,
            Some(max) => max.checked_add(1).ok_or_else(|| ServiceError::Db("id space exhausted".into()))?,
        };
        let country = Country {
            id,
            country_name: payload.country_name,
            country_capital: payload.country_capital,
        };
        map.insert(id, country.clone());
        if let Err(e) = self.save(&map).await {
            map.remove(&id);
            return Err(e);
        }
        Ok(country)
    }

    async fn update(&self, country: Country) -> Result<Country, ServiceError> {
        let mut map = self.inner.write().await;
        let existing = map.get_mut(&country.id).ok_or_else(|| ServiceError::not_found(&format!("country {}", country.id)))?;
        let previous = std::mem::replace(existing, country.clone());
        if let Err(e) = self.save(&map).await {
            map.insert(previous.id, previous);
            return Err(e);
        }
        Ok(country)
    }

    async fn delete(&self, id: i32) -> Result<AddResponse, ServiceError> {
        let mut map = self.inner.write().await;
        let removed = map.remove(&id).ok_or_else(|| ServiceError::not_found(&format!("country {id}")))?;
        if let Err(e) = self.save(&map).await {
            map.insert(id, removed);
            return Err(e);
        }
        Ok(AddResponse::deleted(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn italy() -> Country {
        Country { id: 1, country_name: "Italy".into(), country_capital: "Rome".into() }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids_and_ignores_payload_id() -> Result<(), anyhow::Error> {
        let store = JsonCountryStore::in_memory();
        let a = store.insert(CountryPayload::new("Italy", "Rome").with_id(42)).await?;
        let b = store.insert(CountryPayload::new("France", "Paris")).await?;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        store.delete(2).await?;
        let c = store.insert(CountryPayload::new("Spain", "Madrid")).await?;
        assert_eq!(c.id, 2);
        Ok(())
    }

    #[tokio::test]
    async fn lookups_and_listing_order() -> Result<(), anyhow::Error> {
        let store = JsonCountryStore::with_countries(vec![
            Country { id: 5, country_name: "Peru".into(), country_capital: "Lima".into() },
            italy(),
            Country { id: 3, country_name: "Italy".into(), country_capital: "Florence".into() },
        ]);
        let ids: Vec<i32> = store.find_all().await?.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);

        assert_eq!(store.find_by_id(5).await?.country_capital, "Lima");
        assert_eq!(store.find_by_name("Italy").await?.id, 1);
        assert!(store.find_by_id(9).await.unwrap_err().is_not_found());
        assert!(store.find_by_name("italy").await.unwrap_err().is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_missing_are_not_found() -> Result<(), anyhow::Error> {
        let store = JsonCountryStore::with_countries(vec![italy()]);
        let ghost = Country { id: 2, ..italy() };
        assert!(store.update(ghost).await.unwrap_err().is_not_found());
        assert!(store.delete(2).await.unwrap_err().is_not_found());
        assert_eq!(store.find_all().await?, vec![italy()]);
        Ok(())
    }

    #[tokio::test]
    async fn insert_after_max_id_fails_without_wrapping() -> Result<(), anyhow::Error> {
        let top = Country { id: i32::MAX, ..italy() };
        let store = JsonCountryStore::with_countries(vec![top.clone()]);
        let err = store.insert(CountryPayload::new("Chile", "Santiago")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(ref msg) if msg.contains("id space exhausted")));
        assert_eq!(store.find_all().await?, vec![top]);
        Ok(())
    }

    #[tokio::test]
    async fn file_with_duplicate_ids_is_rejected() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("country_store_dup_{}.json", Uuid::new_v4()));
        let rows = serde_json::json!([
            {"id": 1, "countryName": "Italy", "countryCapital": "Rome"},
            {"id": 1, "countryName": "France", "countryCapital": "Paris"}
        ]);
        tokio::fs::write(&tmp, serde_json::to_vec(&rows)?).await?;
        let res = JsonCountryStore::new(&tmp).await;
        assert!(matches!(res, Err(ServiceError::Db(ref msg)) if msg.contains("duplicate country id 1")));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn file_store_persists_across_reload() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("country_store_{}.json", Uuid::new_v4()));
        let store = JsonCountryStore::new(&tmp).await?;
        assert!(store.find_all().await?.is_empty());

        let created = store.insert(CountryPayload::new("Italy", "Rome")).await?;
        store.insert(CountryPayload::new("Japan", "Tokyo")).await?;
        store.update(Country { country_capital: "Milan".into(), ..created.clone() }).await?;
        store.delete(2).await?;

        let reloaded = JsonCountryStore::new(&tmp).await?;
        let rows = reloaded.find_all().await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country_capital, "Milan");
        let next = reloaded.insert(CountryPayload::new("Chile", "Santiago")).await?;
        assert_eq!(next.id, 2);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
