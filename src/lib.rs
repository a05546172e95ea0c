pub mod auth;
pub mod config;
pub mod content;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;
pub mod utils;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use handlers::{admin, docs, games, health, metrics, pages, upload, AppState};
use storage::local::ASSETS_ROUTE;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .route("/games", get(games::list_games))
        .route("/games/:id", get(games::get_game))
        .route("/visits", post(games::record_visit))
        .route("/pages/guide", get(pages::guide))
        .route("/pages/help", get(pages::help))
        .route("/nav", get(pages::nav))
        .route("/admin/dashboard", get(admin::dashboard))
        .route("/admin/stats", get(admin::stats))
        .route(
            "/admin/games",
            post(upload::upload_game)
                .layer(DefaultBodyLimit::max(state.config.max_upload_size)),
        )
        .route("/admin/logout", post(admin::logout));

    Router::new()
        .route("/health", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(metrics::metrics_handler))
        .nest("/api/v1", api)
        .nest_service(ASSETS_ROUTE, ServeDir::new(&state.config.storage_dir))
        .merge(docs::create_docs_router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
