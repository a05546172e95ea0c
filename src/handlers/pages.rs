use axum::response::Json;

use crate::content::{self, NavLink, PageContent};

pub async fn guide() -> Json<PageContent> {
    Json(content::guide())
}

pub async fn help() -> Json<PageContent> {
    Json(content::help())
}

pub async fn nav() -> Json<Vec<NavLink>> {
    Json(content::nav_links())
}
