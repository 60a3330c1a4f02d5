use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CountryDoc {
    pub id: i32,
    pub country_name: String,
    pub country_capital: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CountryPayloadDoc {
    /// Ignored on create; echoed back on update
    pub id: Option<i32>,
    pub country_name: String,
    pub country_capital: String,
}

#[derive(ToSchema)]
pub struct AddResponseDoc { pub id: i32, pub msg: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::countries::get_countries,
        crate::routes::countries::get_country_by_id,
        crate::routes::countries::get_country_by_name,
        crate::routes::countries::add_country,
        crate::routes::countries::update_country,
        crate::routes::countries::delete_country,
    ),
    components(
        schemas(
            HealthResponse,
            CountryDoc,
            CountryPayloadDoc,
            AddResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "country")
    )
)]
pub struct ApiDoc;
