use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct TrafficLog {
    pub id: Uuid,
    pub visit_date: NaiveDate,
    pub page_views: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct TrafficStats {
    /// Views today.
    pub daily: i64,
    /// Views over the last seven days, today included.
    pub weekly: i64,
}
