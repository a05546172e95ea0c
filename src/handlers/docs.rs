use axum::{response::Json, routing::get, Router};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::games::list_games,
        crate::handlers::games::get_game,
        crate::handlers::games::record_visit,
        crate::handlers::admin::dashboard,
        crate::handlers::admin::stats,
        crate::handlers::upload::upload_game,
    ),
    components(
        schemas(
            crate::models::Game,
            crate::models::GameCard,
            crate::models::ListingPage,
            crate::models::TrafficLog,
            crate::models::TrafficStats,
            crate::models::UserInfo,
            crate::models::DashboardResponse,
            crate::handlers::upload::UploadGameForm,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "games", description = "Public catalog endpoints"),
        (name = "admin", description = "Admin dashboard endpoints")
    ),
    info(
        title = "Game Vault API",
        version = "0.1.0",
        description = "Catalog and download service for PC games"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_docs_router() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
