use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::{BTreeMap, HashSet};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::Result,
    models::{AppRole, Game, GameFilter, NewGame, TrafficLog},
    store::CatalogStore,
};

#[derive(Default)]
struct Inner {
    games: Vec<Game>,
    traffic: BTreeMap<NaiveDate, TrafficLog>,
    roles: HashSet<(Uuid, AppRole)>,
}

/// In-process store with the same semantics as the PostgreSQL one.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn grant_role(&self, user_id: Uuid, role: AppRole) {
        self.inner.write().await.roles.insert((user_id, role));
    }

    /// Inserts a game with an explicit creation time.
    pub async fn insert_game_at(&self, game: &NewGame, created_at: DateTime<Utc>) -> Game {
        let game = Game {
            id: Uuid::new_v4(),
            title: game.title.clone(),
            description: game.description.clone(),
            banner_url: game.banner_url.clone(),
            screenshots: game.screenshots.clone(),
            min_requirements: game.min_requirements.clone(),
            recommended_requirements: game.recommended_requirements.clone(),
            download_link: game.download_link.clone(),
            created_at,
        };
        self.inner.write().await.games.push(game.clone());
        game
    }

    pub async fn game_count(&self) -> usize {
        self.inner.read().await.games.len()
    }

    pub async fn traffic_log(&self, date: NaiveDate) -> Option<TrafficLog> {
        self.inner.read().await.traffic.get(&date).cloned()
    }
}

fn matches(game: &Game, needle: &str) -> bool {
    game.title.to_lowercase().contains(needle) || game.description.to_lowercase().contains(needle)
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_games(&self, filter: &GameFilter) -> Result<(Vec<Game>, i64)> {
        let inner = self.inner.read().await;
        let needle = filter.search.as_ref().map(|s| s.to_lowercase());

        let mut found: Vec<&Game> = inner
            .games
            .iter()
            .filter(|game| needle.as_deref().map_or(true, |n| matches(game, n)))
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = found.len() as i64;
        let page = found
            .into_iter()
            .skip(filter.offset.max(0) as usize)
            .take(filter.limit.max(0) as usize)
            .cloned()
            .collect();

        Ok((page, total))
    }

    async fn get_game(&self, id: Uuid) -> Result<Option<Game>> {
        let inner = self.inner.read().await;
        Ok(inner.games.iter().find(|g| g.id == id).cloned())
    }

    async fn insert_game(&self, game: &NewGame) -> Result<Game> {
        Ok(self.insert_game_at(game, Utc::now()).await)
    }

    async fn record_visit(&self, date: NaiveDate) -> Result<TrafficLog> {
        let mut inner = self.inner.write().await;
        let log = inner.traffic.entry(date).or_insert_with(|| TrafficLog {
            id: Uuid::new_v4(),
            visit_date: date,
            page_views: 0,
        });
        log.page_views += 1;
        Ok(log.clone())
    }

    async fn page_views_between(&self, from: NaiveDate, to: NaiveDate) -> Result<i64> {
        if from > to {
            return Ok(0);
        }
        let inner = self.inner.read().await;
        Ok(inner.traffic.range(from..=to).map(|(_, log)| log.page_views).sum())
    }

    async fn has_role(&self, user_id: Uuid, role: AppRole) -> Result<bool> {
        Ok(self.inner.read().await.roles.contains(&(user_id, role)))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
