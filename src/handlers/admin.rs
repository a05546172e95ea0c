use axum::{
    extract::State,
    response::{Json, Redirect},
};

use crate::{
    errors::{Result, LOGIN_PATH},
    handlers::AppState,
    middleware::auth::{AdminUser, AuthenticatedUser},
    models::{DashboardResponse, TrafficStats},
    services::traffic,
};

#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    responses(
        (status = 200, description = "Signed-in admin and traffic counters", body = DashboardResponse),
        (status = 303, description = "Not signed in or not an admin; redirect to the login page")
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn dashboard(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
) -> Result<Json<DashboardResponse>> {
    let stats = traffic::stats(state.store.as_ref(), traffic::today()).await?;

    Ok(Json(DashboardResponse {
        user: user.info(),
        stats,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    responses(
        (status = 200, description = "Views today and over the last 7 days", body = TrafficStats),
        (status = 303, description = "Not signed in or not an admin; redirect to the login page")
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn stats(State(state): State<AppState>, _admin: AdminUser) -> Result<Json<TrafficStats>> {
    let stats = traffic::stats(state.store.as_ref(), traffic::today()).await?;
    Ok(Json(stats))
}

/// Session revocation happens at the identity provider; this only sends the
/// browser back to the login page.
pub async fn logout(user: Option<AuthenticatedUser>) -> Redirect {
    if let Some(user) = user {
        tracing::info!("User {} signed out", user.id);
    }
    Redirect::to(LOGIN_PATH)
}
