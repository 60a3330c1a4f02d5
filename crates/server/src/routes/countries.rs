use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use service::country::{AddResponse, Country, CountryPayload};
use tracing::{info, warn};

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct NameQuery {
    /// Exact country name
    pub name: String,
}

#[utoipa::path(
    get, path = "/getcountries", tag = "country",
    responses(
        (status = 200, description = "All countries in store order", body = [crate::openapi::CountryDoc]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_countries(State(state): State<AppState>) -> Result<Json<Vec<Country>>, ApiError> {
    Ok(Json(state.countries.get_all().await?))
}

#[utoipa::path(
    get, path = "/getcountries/{id}", tag = "country",
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CountryDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_country_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Country>, StatusCode> {
    match state.countries.get_by_id(id).await {
        Ok(c) => Ok(Json(c)),
        Err(e) => {
            if !e.is_not_found() { warn!(err = %e, id, "get country failed"); }
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[utoipa::path(
    get, path = "/getcountries/countryName", tag = "country",
    params(NameQuery),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CountryDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_country_by_name(State(state): State<AppState>, Query(q): Query<NameQuery>) -> Result<Json<Country>, StatusCode> {
    match state.countries.get_by_name(&q.name).await {
        Ok(c) => Ok(Json(c)),
        Err(e) => {
            if !e.is_not_found() { warn!(err = %e, name = %q.name, "get country by name failed"); }
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[utoipa::path(
    post, path = "/addCountry", tag = "country",
    request_body = crate::openapi::CountryPayloadDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CountryDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn add_country(State(state): State<AppState>, Json(payload): Json<CountryPayload>) -> Result<Json<Country>, ApiError> {
    Ok(Json(state.countries.add(payload).await?))
}

/// Copies name and capital onto the stored record.
///
/// The body echoes the submitted payload, not the persisted row; callers
/// that need the stored state must re-read it.
#[utoipa::path(
    put, path = "/updatecountry/{id}", tag = "country",
    params(("id" = i32, Path, description = "Country ID")),
    request_body = crate::openapi::CountryPayloadDoc,
    responses(
        (status = 200, description = "Updated; echoes the request body", body = crate::openapi::CountryPayloadDoc),
        (status = 409, description = "Conflict")
    )
)]
pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CountryPayload>,
) -> Result<Json<CountryPayload>, StatusCode> {
    let mut existing = state.countries.get_by_id(id).await.map_err(|e| {
        warn!(err = %e, id, "update rejected");
        StatusCode::CONFLICT
    })?;
    existing.country_name = payload.country_name.clone();
    existing.country_capital = payload.country_capital.clone();
    state.countries.update(existing).await.map_err(|e| {
        warn!(err = %e, id, "update failed");
        StatusCode::CONFLICT
    })?;
    info!(id, "updated country");
    Ok(Json(payload))
}

#[utoipa::path(
    delete, path = "/deletecountry/{id}", tag = "country",
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::AddResponseDoc),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_country(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<AddResponse>, ApiError> {
    Ok(Json(state.countries.delete(id).await?))
}
