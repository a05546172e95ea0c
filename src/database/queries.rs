use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::*;

const GAME_COLUMNS: &str = "id, title, description, banner_url, screenshots, min_requirements, \
     recommended_requirements, download_link, created_at";

/// Builds an ILIKE pattern that matches `term` literally as a substring.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub struct GameQueries;

impl GameQueries {
    pub async fn list(pool: &PgPool, filter: &GameFilter) -> Result<Vec<Game>> {
        let pattern = filter.search.as_deref().map(contains_pattern);

        let games = sqlx::query_as::<_, Game>(&format!(
            r#"
            SELECT {GAME_COLUMNS}
            FROM games
            WHERE $1::TEXT IS NULL OR title ILIKE $1 OR description ILIKE $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(pattern)
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(pool)
        .await?;

        Ok(games)
    }

    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64> {
        let pattern = search.map(contains_pattern);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM games
            WHERE $1::TEXT IS NULL OR title ILIKE $1 OR description ILIKE $1
            "#,
        )
        .bind(pattern)
        .fetch_one(pool)
        .await?;

        Ok(total)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Game>> {
        let game = sqlx::query_as::<_, Game>(&format!("SELECT {GAME_COLUMNS} FROM games WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(game)
    }

    pub async fn create(pool: &PgPool, game: &NewGame) -> Result<Game> {
        let game = sqlx::query_as::<_, Game>(&format!(
            r#"
            INSERT INTO games (title, description, banner_url, screenshots, min_requirements, recommended_requirements, download_link)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {GAME_COLUMNS}
            "#
        ))
        .bind(&game.title)
        .bind(&game.description)
        .bind(&game.banner_url)
        .bind(&game.screenshots)
        .bind(&game.min_requirements)
        .bind(&game.recommended_requirements)
        .bind(&game.download_link)
        .fetch_one(pool)
        .await?;

        Ok(game)
    }
}

pub struct TrafficQueries;

impl TrafficQueries {
    pub async fn increment(pool: &PgPool, date: NaiveDate) -> Result<TrafficLog> {
        let log = sqlx::query_as::<_, TrafficLog>(
            r#"
            INSERT INTO traffic_logs (visit_date, page_views)
            VALUES ($1, 1)
            ON CONFLICT (visit_date)
            DO UPDATE SET page_views = traffic_logs.page_views + 1
            RETURNING id, visit_date, page_views
            "#,
        )
        .bind(date)
        .fetch_one(pool)
        .await?;

        Ok(log)
    }

    pub async fn sum_between(pool: &PgPool, from: NaiveDate, to: NaiveDate) -> Result<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(page_views), 0)::BIGINT
            FROM traffic_logs
            WHERE visit_date BETWEEN $1 AND $2
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;

        Ok(total)
    }
}

pub struct RoleQueries;

impl RoleQueries {
    pub async fn has_role(pool: &PgPool, user_id: Uuid, role: AppRole) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM user_roles WHERE user_id = $1 AND role = $2)",
        )
        .bind(user_id)
        .bind(role.as_str())
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    pub async fn grant(pool: &PgPool, user_id: Uuid, role: AppRole) -> Result<()> {
        sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(user_id)
            .bind(role.as_str())
            .execute(pool)
            .await?;

        Ok(())
    }
}
