use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::errors::Result;
use crate::models::{AppRole, Game, GameFilter, NewGame, TrafficLog};
use crate::store::CatalogStore;

pub mod queries;

use queries::{GameQueries, RoleQueries, TrafficQueries};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(sqlx::Error::from)?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for Database {
    async fn list_games(&self, filter: &GameFilter) -> Result<(Vec<Game>, i64)> {
        let total = GameQueries::count(&self.pool, filter.search.as_deref()).await?;
        if filter.offset >= total {
            return Ok((Vec::new(), total));
        }
        let games = GameQueries::list(&self.pool, filter).await?;
        Ok((games, total))
    }

    async fn get_game(&self, id: Uuid) -> Result<Option<Game>> {
        GameQueries::find_by_id(&self.pool, id).await
    }

    async fn insert_game(&self, game: &NewGame) -> Result<Game> {
        GameQueries::create(&self.pool, game).await
    }

    async fn record_visit(&self, date: NaiveDate) -> Result<TrafficLog> {
        TrafficQueries::increment(&self.pool, date).await
    }

    async fn page_views_between(&self, from: NaiveDate, to: NaiveDate) -> Result<i64> {
        TrafficQueries::sum_between(&self.pool, from, to).await
    }

    async fn has_role(&self, user_id: Uuid, role: AppRole) -> Result<bool> {
        RoleQueries::has_role(&self.pool, user_id, role).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
