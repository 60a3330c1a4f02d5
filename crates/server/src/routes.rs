pub mod countries;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use service::country::service::CountryService;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub countries: CountryService,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: country CRUD plus health and API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let countries = Router::new()
        .route("/getcountries", get(countries::get_countries))
        .route("/getcountries/countryName", get(countries::get_country_by_name))
        .route("/getcountries/:id", get(countries::get_country_by_id))
        .route("/addCountry", post(countries::add_country))
        .route("/updatecountry/:id", put(countries::update_country))
        .route("/deletecountry/:id", delete(countries::delete_country));

    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    public
        .merge(countries)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
