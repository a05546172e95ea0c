use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use crate::{
    errors::Result,
    handlers::AppState,
    models::{Game, ListingPage, ListingParams, TrafficLog},
    services::{catalog, traffic},
};

/// Home page listing. Every load also counts as a visit for today.
#[utoipa::path(
    get,
    path = "/api/v1/games",
    params(ListingParams),
    responses(
        (status = 200, description = "One page of games, newest first", body = ListingPage),
        (status = 500, description = "Backend failure")
    ),
    tag = "games"
)]
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ListingPage>> {
    match traffic::record_visit(state.store.as_ref(), traffic::today()).await {
        Ok(_) => state.metrics.record_page_view(),
        Err(e) => tracing::warn!("Failed to record visit: {}", e),
    }

    let page = catalog::list_games(
        state.store.as_ref(),
        params.q.as_deref(),
        params.page,
        state.config.page_size,
    )
    .await?;

    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/v1/games/{id}",
    params(("id" = String, Path, description = "Game id")),
    responses(
        (status = 200, description = "The game", body = Game),
        (status = 404, description = "Game not found")
    ),
    tag = "games"
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Game>> {
    let game = catalog::get_game(state.store.as_ref(), &id).await?;
    Ok(Json(game))
}

#[utoipa::path(
    post,
    path = "/api/v1/visits",
    responses((status = 200, description = "Today's counter after the increment", body = TrafficLog)),
    tag = "games"
)]
pub async fn record_visit(State(state): State<AppState>) -> Result<Json<TrafficLog>> {
    let log = traffic::record_visit(state.store.as_ref(), traffic::today()).await?;
    state.metrics.record_page_view();
    Ok(Json(log))
}
