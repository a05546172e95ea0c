use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::TrafficStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Admin,
    User,
}

impl AppRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppRole::Admin => "admin",
            AppRole::User => "user",
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub user: UserInfo,
    pub stats: TrafficStats,
}
