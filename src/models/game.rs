use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub banner_url: Option<String>,
    pub screenshots: Vec<String>,
    pub min_requirements: Option<String>,
    pub recommended_requirements: Option<String>,
    pub download_link: String,
    pub created_at: DateTime<Utc>,
}

/// A validated game row ready for insertion. Asset URLs are already public.
#[derive(Debug, Clone, Default)]
pub struct NewGame {
    pub title: String,
    pub description: String,
    pub banner_url: Option<String>,
    pub screenshots: Vec<String>,
    pub min_requirements: Option<String>,
    pub recommended_requirements: Option<String>,
    pub download_link: String,
}

#[derive(Debug, Clone, Default)]
pub struct GameFilter {
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingParams {
    /// Free-text search over title and description.
    pub q: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
}

/// What the home page grid shows for one game.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GameCard {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub banner_url: Option<String>,
    pub download_link: String,
    pub created_at: DateTime<Utc>,
}

impl From<Game> for GameCard {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            title: game.title,
            description: game.description,
            banner_url: game.banner_url,
            download_link: game.download_link,
            created_at: game.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListingPage {
    pub games: Vec<GameCard>,
    pub query: Option<String>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: i64,
    pub total_pages: u32,
}
