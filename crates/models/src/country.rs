use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A stored country. `id` is assigned by the store and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "country")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub country_name: String,
    pub country_capital: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Country = Model;

/// Request body for create and update. The id is optional: create ignores it,
/// update echoes it back untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub country_name: String,
    pub country_capital: String,
}

impl CountryPayload {
    pub fn new(country_name: impl Into<String>, country_capital: impl Into<String>) -> Self {
        Self { id: None, country_name: country_name.into(), country_capital: country_capital.into() }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

/// Acknowledgement returned by delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddResponse {
    pub id: i32,
    pub msg: String,
}

impl AddResponse {
    pub fn deleted(id: i32) -> Self {
        Self { id, msg: "Country deleted".into() }
    }
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::NotFound(format!("country {id}")))
}

/// First country (lowest id) whose name matches exactly.
pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Model, ModelError> {
    Entity::find()
        .filter(Column::CountryName.eq(name))
        .order_by_asc(Column::Id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::NotFound(format!("country named {name}")))
}

pub async fn create(db: &DatabaseConnection, country_name: &str, country_capital: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        country_name: Set(country_name.to_string()),
        country_capital: Set(country_capital.to_string()),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite name and capital of an existing row.
pub async fn update_fields(
    db: &DatabaseConnection,
    id: i32,
    country_name: &str,
    country_capital: &str,
) -> Result<Model, ModelError> {
    let mut found: ActiveModel = find_by_id(db, id).await?.into();
    found.country_name = Set(country_name.to_string());
    found.country_capital = Set(country_capital.to_string());
    Ok(found.update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<AddResponse, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound(format!("country {id}")));
    }
    Ok(AddResponse::deleted(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let c = Model { id: 1, country_name: "Italy".into(), country_capital: "Rome".into() };
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v, serde_json::json!({"id": 1, "countryName": "Italy", "countryCapital": "Rome"}));
    }

    #[test]
    fn payload_id_is_optional() {
        let p: CountryPayload = serde_json::from_str(r#"{"countryName":"Peru","countryCapital":"Lima"}"#).unwrap();
        assert_eq!(p, CountryPayload::new("Peru", "Lima"));
        let v = serde_json::to_value(&p).unwrap();
        assert!(v.get("id").is_none());

        let p: CountryPayload = serde_json::from_str(r#"{"id":7,"countryName":"Peru","countryCapital":"Lima"}"#).unwrap();
        assert_eq!(p.id, Some(7));
    }

    #[test]
    fn delete_ack_message() {
        let ack = AddResponse::deleted(3);
        assert_eq!(serde_json::to_value(&ack).unwrap(), serde_json::json!({"id": 3, "msg": "Country deleted"}));
    }
}
