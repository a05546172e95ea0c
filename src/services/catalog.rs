//! Public catalog reads: the home listing and the per-game detail.

use uuid::Uuid;

use crate::{
    errors::{AppError, Result},
    models::{Game, GameCard, GameFilter, ListingPage},
    store::CatalogStore,
};

/// Normalizes a raw search box value. Blank input means no filter.
pub fn normalize_query(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
}

pub fn total_pages(total_count: i64, page_size: u32) -> u32 {
    if total_count <= 0 || page_size == 0 {
        return 0;
    }
    let size = i64::from(page_size);
    ((total_count + size - 1) / size) as u32
}

pub async fn list_games(
    store: &dyn CatalogStore,
    query: Option<&str>,
    page: Option<u32>,
    page_size: u32,
) -> Result<ListingPage> {
    let search = normalize_query(query);
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.max(1);

    let filter = GameFilter {
        search: search.clone(),
        limit: i64::from(page_size),
        offset: i64::from(page - 1) * i64::from(page_size),
    };

    let (games, total_count) = store.list_games(&filter).await?;
    tracing::debug!(
        "Listing page {} for {:?}: {} of {} games",
        page,
        search,
        games.len(),
        total_count
    );

    Ok(ListingPage {
        games: games.into_iter().map(GameCard::from).collect(),
        query: search,
        page,
        page_size,
        total_count,
        total_pages: total_pages(total_count, page_size),
    })
}

/// Fetches one game. Identifiers that are not UUIDs cannot exist, so they are
/// reported the same way as missing rows.
pub async fn get_game(store: &dyn CatalogStore, id: &str) -> Result<Game> {
    let not_found = || AppError::NotFound("Game not found".to_string());

    let id = Uuid::parse_str(id).map_err(|_| not_found())?;
    store.get_game(id).await?.ok_or_else(not_found)
}
