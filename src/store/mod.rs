use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::{AppRole, Game, GameFilter, NewGame, TrafficLog};

pub mod memory;

pub use memory::MemoryStore;

/// The relational side of the backend: games, per-day traffic counters and
/// role rows. Every handler reaches the data through this trait.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns one page of games, newest first, and the total number of matches.
    async fn list_games(&self, filter: &GameFilter) -> Result<(Vec<Game>, i64)>;

    async fn get_game(&self, id: Uuid) -> Result<Option<Game>>;

    async fn insert_game(&self, game: &NewGame) -> Result<Game>;

    /// Creates the counter for `date` at 1, or increments the existing one.
    async fn record_visit(&self, date: NaiveDate) -> Result<TrafficLog>;

    /// Sum of page views for every date in `from..=to`.
    async fn page_views_between(&self, from: NaiveDate, to: NaiveDate) -> Result<i64>;

    async fn has_role(&self, user_id: Uuid, role: AppRole) -> Result<bool>;

    async fn ping(&self) -> Result<()>;
}
